//! FlagError: Unified error type for mesh-flags public APIs
//!
//! Every failure in this crate happens while a flag space, a flag group or a
//! table family is being *built*. Once construction succeeds, lookups are
//! total and never fail.

use thiserror::Error;

use crate::algs::flags::Flag;

/// Unified error type for flag enumeration and table construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlagError {
    /// A valid flag has zero or several switch partners at some dimension,
    /// so the level definitions do not form a flag complex.
    #[error(
        "Malformed complex: flag {flag} has {partners} switch partners at dimension {dimension} (expected exactly 1)"
    )]
    MalformedComplex {
        flag: Flag,
        dimension: usize,
        partners: usize,
    },
    /// The simplicial-set codec could not encode or decode a flag.
    #[error("Encoding mismatch for flag {flag}: {detail}")]
    EncodingMismatch { flag: Flag, detail: String },
    /// No action moves a flag onto the requested simplex.
    #[error(
        "No face-changing action maps valid flag {flag} onto simplex {simplex} of dimension {dimension}"
    )]
    NoFaceChangingAction {
        flag: usize,
        dimension: usize,
        simplex: usize,
    },
    /// The ascending label sequence is not a valid flag of the complex.
    #[error("Identity flag (ascending label sequence) is not a valid flag")]
    MissingIdentity,
    /// The composition of two valid flags left the valid-flag set.
    #[error("Product of valid flags {left} and {right} is not a valid flag")]
    ProductOutsideFlagSet { left: usize, right: usize },
    /// A level (dimension) index beyond the complex.
    #[error("Level {level} out of range (complex has {levels} levels)")]
    LevelOutOfRange { level: usize, levels: usize },
    /// A valid-flag index beyond the flag space.
    #[error("Valid flag index {index} out of range (flag space has {count} flags)")]
    FlagIndexOutOfRange { index: usize, count: usize },
    /// A simplex index beyond its level.
    #[error("Simplex index {index} out of range at level {level} (level has {count} simplices)")]
    SimplexIndexOutOfRange {
        level: usize,
        index: usize,
        count: usize,
    },
    /// A ground label that the reference simplex does not have.
    #[error("Label {label} out of range (ground set has {count} labels)")]
    LabelOutOfRange { label: usize, count: usize },
    /// The raw candidate space is too large to index.
    #[error("Raw flag space of a {levels}-level complex exceeds {limit} candidates")]
    RawSpaceTooLarge { levels: usize, limit: usize },
    /// A built table contradicts a law it must obey.
    #[error("Inconsistent {table} table at row {row}: {detail}")]
    InconsistentTable {
        table: &'static str,
        row: usize,
        detail: String,
    },
    /// The subgroup complex does not embed into the group complex.
    #[error("Embedding mismatch: {0}")]
    EmbeddingMismatch(String),
    /// A complex description could not be turned into a reference complex.
    #[error("Invalid complex description: {0}")]
    InvalidComplexDescription(String),
    /// I/O failure while reading a description or writing tables.
    #[error("I/O error: {0}")]
    Io(String),
    /// JSON (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FlagError {
    fn from(err: std::io::Error) -> Self {
        FlagError::Io(err.to_string())
    }
}

impl From<std::fmt::Error> for FlagError {
    fn from(err: std::fmt::Error) -> Self {
        FlagError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FlagError {
    fn from(err: serde_json::Error) -> Self {
        FlagError::Serialization(err.to_string())
    }
}

#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-flags
//!
//! mesh-flags enumerates the flags of a reference simplex and derives the
//! dense lookup tables that tuple-based mesh navigation is built on. A flag
//! picks one face per dimension so that the faces nest; switching one of
//! them yields the unique neighboring flag, and writing a flag as a label
//! permutation turns the valid flags into a group.
//!
//! ## Features
//! - Reference complexes for any dimension, standard or hand-written
//! - Flag enumeration with a fixed raw/valid index convention
//! - Switch operator and simplicial-set codec
//! - Group algebra: identity, product, inverse, parity
//! - Table builders: switch, product, inverse, orientation mirror, subgroup
//!   embedding, face-changing actions, anchors
//! - JSON and Rust-source writers for emitting the tables as constant data
//!
//! ## Usage
//!
//! ```rust
//! use mesh_flags::prelude::*;
//!
//! let tables = FlagTables::build_standard(SimplexType::Tetrahedron, &TableOptions::default())?;
//! assert_eq!(tables.len(), 24);
//! assert_eq!(tables.switch.row(0), Some(&[6, 5, 1][..]));
//! # Ok::<(), FlagError>(())
//! ```
//!
//! ## Index conventions
//! Raw flags enumerate with level 0 varying slowest. Valid-flag indices are
//! positions in that enumeration after dropping invalid flags, and dimension
//! indices are 0-based in level order. All tables use these indices.
//!
//! ## Determinism
//! Table construction has no randomness. Enabling the `rayon` feature and
//! [`TableOptions::parallel`](algs::tables::TableOptions) changes how rows
//! are computed, never their content.

pub mod algs;
pub mod debug_invariants;
pub mod flag_error;
pub mod io;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::codec::{flag_to_simplicial_set, simplicial_set_to_flag};
    pub use crate::algs::flags::{Flag, FlagSpace};
    pub use crate::algs::group::FlagGroup;
    pub use crate::algs::switch::switch;
    pub use crate::algs::tables::{
        FaceChangingTable, FlagTables, MissingActionHandling, SubgroupEmbedding, TableOptions,
        TableSuite, TieBreak,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::flag_error::FlagError;
    pub use crate::io::{
        ComplexReader, JsonComplexReader, JsonTableWriter, RustSourceWriter, TableWriter,
    };
    pub use crate::topology::cell_type::SimplexType;
    pub use crate::topology::complex::ReferenceComplex;
    pub use crate::topology::orientation::Sign;
    pub use crate::topology::simplex::{Label, Simplex};
    pub use crate::topology::simplicial_set::SimplicialSet;
}

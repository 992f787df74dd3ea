//! Readers for complex descriptions and writers for built tables.
//!
//! This module provides trait-based readers and writers so that new formats
//! plug in without touching table construction.

pub mod json;
pub mod rust_source;

pub use json::{JsonComplexReader, JsonTableWriter};
pub use rust_source::{IntWidth, RustSourceWriter};

use crate::algs::tables::{FlagTables, TableSuite};
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;
use std::io::{Read, Write};

/// Trait for readers that produce a reference complex.
pub trait ComplexReader {
    /// Parse a complex description from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<ReferenceComplex, FlagError>;
}

/// Trait for writers that serialize built tables.
pub trait TableWriter {
    /// Write the tables of one complex.
    fn write<W: Write>(&self, writer: W, tables: &FlagTables) -> Result<(), FlagError>;

    /// Write several table bundles and their embeddings.
    fn write_suite<W: Write>(&self, writer: W, suite: &TableSuite) -> Result<(), FlagError>;
}

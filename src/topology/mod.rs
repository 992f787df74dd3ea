//! Top-level module for reference-simplex topology.
//!
//! This module provides the combinatorial vocabulary the flag algebra is
//! built on:
//! - Ground labels and [`Simplex`] label sets
//! - [`ReferenceComplex`]: the faces of a reference simplex, level by level
//! - [`SimplicialSet`]: flags written as label permutations
//! - Parity ([`Sign`]) and the [`Orientation`] group trait
//!
//! Most users start from [`ReferenceComplex::standard`] or
//! [`SimplexType::reference_complex`] and hand the result to
//! [`crate::algs::flags::FlagSpace`].

pub mod cell_type;
pub mod complex;
pub mod orientation;
pub mod simplex;
pub mod simplicial_set;

pub use cell_type::SimplexType;
pub use complex::{ComplexDescription, Level, ReferenceComplex};
pub use orientation::*;
pub use simplex::{Label, Simplex};
pub use simplicial_set::SimplicialSet;

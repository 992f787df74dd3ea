//! Simplex type metadata for reference complexes.

use crate::topology::complex::ReferenceComplex;

/// Reference simplices with a standard complex.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum SimplexType {
    /// 0D point; its complex has no levels and a single (empty) flag.
    Vertex,
    /// 1D segment/edge.
    Edge,
    /// 2D simplex (triangle).
    Triangle,
    /// 3D simplex (tet).
    Tetrahedron,
    /// Generic simplex with dimension `d`.
    Simplex(u8),
}

impl Default for SimplexType {
    fn default() -> Self {
        SimplexType::Triangle
    }
}

impl SimplexType {
    /// Returns the topological dimension of the simplex.
    pub fn dimension(self) -> u8 {
        match self {
            SimplexType::Vertex => 0,
            SimplexType::Edge => 1,
            SimplexType::Triangle => 2,
            SimplexType::Tetrahedron => 3,
            SimplexType::Simplex(d) => d,
        }
    }

    /// The named type for a dimension, falling back to `Simplex(d)` above 3.
    pub fn from_dimension(d: u8) -> Self {
        match d {
            0 => SimplexType::Vertex,
            1 => SimplexType::Edge,
            2 => SimplexType::Triangle,
            3 => SimplexType::Tetrahedron,
            d => SimplexType::Simplex(d),
        }
    }

    /// Short lowercase name, used as a prefix for emitted tables.
    pub fn name(self) -> String {
        match self {
            SimplexType::Vertex => "vertex".into(),
            SimplexType::Edge => "edge".into(),
            SimplexType::Triangle => "triangle".into(),
            SimplexType::Tetrahedron => "tetrahedron".into(),
            SimplexType::Simplex(d) => format!("simplex{d}"),
        }
    }

    /// Standard reference complex of this simplex.
    pub fn reference_complex(self) -> ReferenceComplex {
        ReferenceComplex::standard(self.dimension())
    }

    /// Number of valid flags of the standard complex, `(d + 1)!`.
    pub fn flag_count(self) -> usize {
        (1..=self.dimension() as usize + 1).product()
    }
}

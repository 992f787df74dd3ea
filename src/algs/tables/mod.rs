//! Dense lookup tables derived from a reference complex.
//!
//! Every builder takes the complex (and the flag space and group built from
//! it) by reference and returns a new immutable table. [`FlagTables`] bundles
//! all families for one complex; [`TableSuite`] adds subgroup embeddings
//! between several simplex types.

pub mod embedding;
pub mod face_changing;
pub mod mirror;
pub mod options;
pub mod orientation_tables;
pub mod product;
pub mod switch_table;

pub use embedding::SubgroupEmbedding;
pub use face_changing::{FaceChangingTable, preserved_levels};
pub use mirror::MirrorTable;
pub use options::{MissingActionHandling, TableOptions, TieBreak};
pub use orientation_tables::{AnchorTable, ParityTable, PrimitiveActions};
pub use product::{InverseTable, ProductTable};
pub use switch_table::SwitchTable;

use crate::algs::flags::{Flag, FlagSpace};
use crate::algs::group::FlagGroup;
use crate::debug_invariants::DebugInvariants;
use crate::flag_error::FlagError;
use crate::topology::cell_type::SimplexType;
use crate::topology::complex::ReferenceComplex;
use crate::topology::simplicial_set::SimplicialSet;

/// Every table family of one reference complex.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FlagTables {
    /// Prefix for emitted constants.
    pub name: String,
    pub complex: ReferenceComplex,
    pub valid_flags: Vec<Flag>,
    pub simplicial_sets: Vec<SimplicialSet>,
    pub valid_to_raw: Vec<usize>,
    pub raw_to_valid: Vec<Option<usize>>,
    pub switch: SwitchTable,
    pub product: ProductTable,
    pub inverse: InverseTable,
    pub actions: PrimitiveActions,
    pub parity: ParityTable,
    /// Absent when the ground set has fewer than two labels.
    pub mirror: Option<MirrorTable>,
    pub anchors: AnchorTable,
    pub face_changing: Vec<FaceChangingTable>,
}

impl FlagTables {
    /// Build every table family of `complex`.
    ///
    /// A complex without valid flags yields empty tables.
    pub fn build(
        name: impl Into<String>,
        complex: &ReferenceComplex,
        options: &TableOptions,
    ) -> Result<Self, FlagError> {
        let space = FlagSpace::new(complex)?;
        if space.is_empty() {
            return Ok(Self::empty(name.into(), complex, &space));
        }
        let group = FlagGroup::new(complex, &space)?;
        Self::from_parts(name.into(), complex, &space, &group, options)
    }

    /// Tables of the standard complex of `ty`, named after it.
    pub fn build_standard(ty: SimplexType, options: &TableOptions) -> Result<Self, FlagError> {
        Self::build(ty.name(), &ty.reference_complex(), options)
    }

    fn empty(name: String, complex: &ReferenceComplex, space: &FlagSpace) -> Self {
        Self {
            name,
            complex: complex.clone(),
            valid_to_raw: space.valid_to_raw().to_vec(),
            raw_to_valid: space.raw_to_valid().to_vec(),
            anchors: AnchorTable::build(complex, space, None),
            ..Self::default()
        }
    }

    fn from_parts(
        name: String,
        complex: &ReferenceComplex,
        space: &FlagSpace,
        group: &FlagGroup,
        options: &TableOptions,
    ) -> Result<Self, FlagError> {
        let switch = SwitchTable::build(complex, space)?;
        let product = ProductTable::build(group, options.parallel)?;
        let inverse = InverseTable::build(&product, group.identity())?;
        let actions = PrimitiveActions::build(complex, space, group)?;
        let parity = ParityTable::build(group)?;
        let mirror = if group.label_count() >= 2 {
            Some(MirrorTable::build(group, options.mirror_labels)?)
        } else {
            None
        };
        let anchors = AnchorTable::build(
            complex,
            space,
            options.anchor_parity.map(|sign| (&parity, sign)),
        );
        let face_changing = options
            .face_changing_targets(complex.level_count())
            .into_iter()
            .map(|d| FaceChangingTable::build(complex, space, group, d, options))
            .collect::<Result<Vec<_>, _>>()?;

        let tables = Self {
            name,
            complex: complex.clone(),
            valid_flags: space.valid_flags().to_vec(),
            simplicial_sets: group.simplicial_sets().to_vec(),
            valid_to_raw: space.valid_to_raw().to_vec(),
            raw_to_valid: space.raw_to_valid().to_vec(),
            switch,
            product,
            inverse,
            actions,
            parity,
            mirror,
            anchors,
            face_changing,
        };
        log::info!(
            "built tables `{}`: {} valid flags, {} face-changing dimensions",
            tables.name,
            tables.len(),
            tables.face_changing.len()
        );
        crate::debug_invariants!(tables.validate_invariants(), "FlagTables::build");
        Ok(tables)
    }

    /// Number of valid flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.valid_flags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.valid_flags.is_empty()
    }

    /// Face-changing table for target dimension `d`, if it was built.
    pub fn face_changing_for(&self, d: usize) -> Option<&FaceChangingTable> {
        self.face_changing.iter().find(|t| t.dimension() == d)
    }
}

impl DebugInvariants for FlagTables {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "FlagTables");
    }

    /// Check that the built tables are total and obey the group laws that
    /// can be read off the tables alone.
    fn validate_invariants(&self) -> Result<(), FlagError> {
        let n = self.len();
        let in_range = |index: usize| {
            if index < n {
                Ok(index)
            } else {
                Err(FlagError::FlagIndexOutOfRange { index, count: n })
            }
        };
        for (i, row) in self.switch.rows().iter().enumerate() {
            for (d, &j) in row.iter().enumerate() {
                let back = self.switch.get(in_range(j)?, d);
                if back != Some(i) {
                    return Err(FlagError::InconsistentTable {
                        table: "switch",
                        row: i,
                        detail: format!("switching dimension {d} twice leads to {back:?}"),
                    });
                }
            }
        }
        if let Some(identity) = self.actions.identity {
            for i in 0..n {
                let inv = in_range(self.inverse.get(i).unwrap_or(n))?;
                let product = self.product.get(i, inv);
                if product != Some(identity) {
                    return Err(FlagError::InconsistentTable {
                        table: "inverse",
                        row: i,
                        detail: format!("product with inverse {inv} is {product:?}"),
                    });
                }
            }
        }
        if let Some(mirror) = &self.mirror {
            for i in 0..mirror.len() {
                let m = in_range(mirror.get(i).unwrap_or(n))?;
                if mirror.get(m) != Some(i) {
                    return Err(FlagError::InconsistentTable {
                        table: "mirror",
                        row: i,
                        detail: format!("mirror image {m} does not mirror back"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// One embedding between two tables of a [`TableSuite`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NamedEmbedding {
    pub sub: String,
    pub group: String,
    pub embedding: SubgroupEmbedding,
}

/// Tables for several simplex types plus the embeddings between each type
/// and the next larger one.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableSuite {
    pub tables: Vec<FlagTables>,
    pub embeddings: Vec<NamedEmbedding>,
}

impl TableSuite {
    /// Build standard tables for `types` (sorted by dimension, duplicates
    /// dropped) and embed each into its successor.
    ///
    /// Face-changing targets in `options` apply to every type that has that
    /// level; smaller types skip the ones they lack.
    pub fn build(types: &[SimplexType], options: &TableOptions) -> Result<Self, FlagError> {
        let mut types = types.to_vec();
        types.sort_by_key(|t| t.dimension());
        types.dedup_by_key(|t| t.dimension());

        let mut tables = Vec::with_capacity(types.len());
        let mut groups = Vec::with_capacity(types.len());
        for ty in &types {
            let complex = ty.reference_complex();
            let space = FlagSpace::new(&complex)?;
            let group = FlagGroup::new(&complex, &space)?;
            let options = options.for_levels(complex.level_count());
            tables.push(FlagTables::from_parts(ty.name(), &complex, &space, &group, &options)?);
            groups.push(group);
        }

        let embeddings = types
            .iter()
            .zip(&groups)
            .zip(types.iter().zip(&groups).skip(1))
            .map(|((sub_ty, sub), (ty, group))| -> Result<_, FlagError> {
                Ok(NamedEmbedding {
                    sub: sub_ty.name(),
                    group: ty.name(),
                    embedding: SubgroupEmbedding::build(sub, group)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tables, embeddings })
    }

    pub fn get(&self, name: &str) -> Option<&FlagTables> {
        self.tables.iter().find(|t| t.name == name)
    }
}

//! Switch table: `table[i][d] = switch(i, d)`.

use crate::algs::flags::FlagSpace;
use crate::algs::switch::switch;
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;

/// Dense `[valid flag][dimension]` table of switch partners.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SwitchTable {
    rows: Vec<Vec<usize>>,
}

impl SwitchTable {
    /// Switch every valid flag at every dimension. Fails with
    /// `MalformedComplex` on the first flag without exactly one partner.
    pub fn build(complex: &ReferenceComplex, space: &FlagSpace) -> Result<Self, FlagError> {
        let levels = complex.level_count();
        let rows = (0..space.len())
            .map(|i| {
                (0..levels)
                    .map(|d| switch(complex, space, i, d))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("switch table: {} x {}", rows.len(), levels);
        Ok(Self { rows })
    }

    #[inline]
    pub fn get(&self, index: usize, d: usize) -> Option<usize> {
        self.rows.get(index)?.get(d).copied()
    }

    pub fn row(&self, index: usize) -> Option<&[usize]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! Product and inverse tables of the flag group.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::algs::group::FlagGroup;
use crate::flag_error::FlagError;

/// Dense `[left][right]` table of `product(left, right)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProductTable {
    rows: Vec<Vec<usize>>,
}

impl ProductTable {
    /// Multiply every ordered pair of valid flags.
    ///
    /// With `parallel` (and the `rayon` feature) rows are built concurrently;
    /// the result is identical to the serial path.
    pub fn build(group: &FlagGroup, parallel: bool) -> Result<Self, FlagError> {
        let n = group.len();
        let row = |i: usize| -> Result<Vec<usize>, FlagError> {
            (0..n).map(|j| group.product(i, j)).collect()
        };

        #[cfg(feature = "rayon")]
        let rows = if parallel {
            (0..n).into_par_iter().map(row).collect::<Result<Vec<_>, _>>()?
        } else {
            (0..n).map(row).collect::<Result<Vec<_>, _>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let rows = {
            if parallel {
                log::trace!("rayon feature disabled; building product table serially");
            }
            (0..n).map(row).collect::<Result<Vec<_>, _>>()?
        };

        log::debug!("product table: {n} x {n}");
        Ok(Self { rows })
    }

    #[inline]
    pub fn get(&self, left: usize, right: usize) -> Option<usize> {
        self.rows.get(left)?.get(right).copied()
    }

    pub fn row(&self, left: usize) -> Option<&[usize]> {
        self.rows.get(left).map(Vec::as_slice)
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

    /// The `j` with `product(index, j) == identity`, found by searching row
    /// `index` for the identity column.
    pub fn inverse(&self, index: usize, identity: usize) -> Option<usize> {
        self.rows.get(index)?.iter().position(|&p| p == identity)
    }
}

/// `table[i] = inverse(i)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct InverseTable {
    entries: Vec<usize>,
}

impl InverseTable {
    /// Read every inverse off the product table.
    pub fn build(products: &ProductTable, identity: usize) -> Result<Self, FlagError> {
        let entries = (0..products.len())
            .map(|i| {
                products
                    .inverse(i, identity)
                    .ok_or(FlagError::ProductOutsideFlagSet {
                        left: i,
                        right: identity,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

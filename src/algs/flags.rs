//! Flag enumeration, validation and the dense valid-flag index.
//!
//! A *flag* (raw tuple) picks one simplex index per level of a
//! [`ReferenceComplex`]. It is *valid* when the picked simplices form a nested
//! chain: the level-`d` simplex is a subset of the level-`d + 1` simplex for
//! every adjacent pair.
//!
//! Raw flags are enumerated lexicographically with **level 0 varying
//! slowest**. The same convention defines the raw index (mixed radix, level 0
//! most significant) and, by filtering, the valid-flag index space. Every
//! emitted table depends on this order, so it is fixed crate-wide.

use std::fmt;
use std::ops::Deref;

use itertools::{Either, Itertools};

use crate::debug_invariants::DebugInvariants;
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;

/// One simplex index per level, level 0 first.
#[derive(
    Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug, serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Flag(Vec<usize>);

impl Flag {
    pub fn new(indices: Vec<usize>) -> Self {
        Flag(indices)
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for Flag {
    type Target = [usize];
    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Flag {
    fn from(v: Vec<usize>) -> Self {
        Flag(v)
    }
}

impl<const N: usize> From<[usize; N]> for Flag {
    fn from(v: [usize; N]) -> Self {
        Flag(v.to_vec())
    }
}

/// Prints as a tuple, e.g. `(0, 2)`.
impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

/// Every raw flag of `complex`, level 0 varying slowest.
///
/// A complex without levels has exactly one (empty) flag; a complex with an
/// empty level has none.
pub fn enumerate_all(complex: &ReferenceComplex) -> impl Iterator<Item = Flag> + '_ {
    if complex.level_count() == 0 {
        return Either::Left(std::iter::once(Flag::default()));
    }
    Either::Right(
        complex
            .levels()
            .iter()
            .map(|level| 0..level.len())
            .multi_cartesian_product()
            .map(Flag),
    )
}

/// True iff `flag` has one in-range index per level and its simplices form a
/// nested chain across every adjacent pair of levels.
pub fn is_valid(complex: &ReferenceComplex, flag: &[usize]) -> bool {
    if flag.len() != complex.level_count() {
        return false;
    }
    let mut chain = Vec::with_capacity(flag.len());
    for (d, &i) in flag.iter().enumerate() {
        match complex.simplex(d, i) {
            Some(s) => chain.push(s),
            None => return false,
        }
    }
    chain.windows(2).all(|w| w[0].is_subset_of(w[1]))
}

/// The valid flags of a complex in discovery order, with O(1) maps between
/// valid indices, raw flags and raw indices.
///
/// Holds no reference to the complex it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagSpace {
    level_sizes: Vec<usize>,
    /// `strides[d]` is the raw-index weight of level `d`.
    strides: Vec<usize>,
    flags: Vec<Flag>,
    valid_to_raw: Vec<usize>,
    raw_to_valid: Vec<Option<usize>>,
}

impl FlagSpace {
    /// Scan every raw flag of `complex` once and index the valid ones.
    ///
    /// Fails with [`FlagError::RawSpaceTooLarge`] when the raw space exceeds
    /// [`MAX_RAW_FLAGS`](crate::topology::complex::MAX_RAW_FLAGS).
    pub fn new(complex: &ReferenceComplex) -> Result<Self, FlagError> {
        let raw_count = complex.raw_flag_count()?;
        let level_sizes = complex.level_sizes();
        let mut strides = vec![1usize; level_sizes.len()];
        for d in (0..level_sizes.len().saturating_sub(1)).rev() {
            // Saturates only past an empty level, where no raw index exists.
            strides[d] = strides[d + 1].saturating_mul(level_sizes[d + 1]);
        }

        let mut flags = Vec::new();
        let mut valid_to_raw = Vec::new();
        let mut raw_to_valid = vec![None; raw_count];
        for (raw, flag) in enumerate_all(complex).enumerate() {
            if is_valid(complex, &flag) {
                let valid = flags.len();
                raw_to_valid[raw] = Some(valid);
                valid_to_raw.push(raw);
                flags.push(flag);
            }
        }

        if flags.is_empty() {
            log::warn!(
                "reference complex with level sizes {level_sizes:?} has no valid flags; all tables will be empty"
            );
        } else {
            log::debug!(
                "flag space: {} valid of {} raw flags, level sizes {:?}",
                flags.len(),
                raw_count,
                level_sizes
            );
        }

        let space = Self {
            level_sizes,
            strides,
            flags,
            valid_to_raw,
            raw_to_valid,
        };
        crate::debug_invariants!(space.validate_invariants(), "FlagSpace::new");
        Ok(space)
    }

    /// Number of valid flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.level_sizes.len()
    }

    pub fn level_sizes(&self) -> &[usize] {
        &self.level_sizes
    }

    /// Size of the raw candidate space (product of level sizes).
    #[inline]
    pub fn raw_count(&self) -> usize {
        self.raw_to_valid.len()
    }

    /// Valid flags in valid-index order.
    pub fn valid_flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Flag)> + '_ {
        self.flags.iter().enumerate()
    }

    #[inline]
    pub fn flag_of(&self, index: usize) -> Option<&Flag> {
        self.flags.get(index)
    }

    /// Like [`flag_of`](Self::flag_of) but with a typed error.
    pub fn try_flag_of(&self, index: usize) -> Result<&Flag, FlagError> {
        self.flags.get(index).ok_or(FlagError::FlagIndexOutOfRange {
            index,
            count: self.flags.len(),
        })
    }

    /// Valid index of `flag`, or `None` if it is not a valid flag.
    #[inline]
    pub fn index_of(&self, flag: &[usize]) -> Option<usize> {
        self.raw_index(flag).and_then(|raw| self.raw_to_valid[raw])
    }

    /// Reference oracle for [`index_of`](Self::index_of): a linear scan of the
    /// valid flags. Not for table construction.
    pub fn linear_index_of(&self, flag: &[usize]) -> Option<usize> {
        self.flags.iter().position(|f| f.indices() == flag)
    }

    /// Mixed-radix position of `flag` among all raw flags.
    pub fn raw_index(&self, flag: &[usize]) -> Option<usize> {
        if flag.len() != self.level_sizes.len() {
            return None;
        }
        let mut raw = 0;
        for (d, &i) in flag.iter().enumerate() {
            if i >= self.level_sizes[d] {
                return None;
            }
            raw += i * self.strides[d];
        }
        Some(raw)
    }

    /// Inverse of [`raw_index`](Self::raw_index).
    pub fn raw_flag(&self, raw: usize) -> Option<Flag> {
        if raw >= self.raw_count() {
            return None;
        }
        Some(Flag(
            self.strides
                .iter()
                .zip(&self.level_sizes)
                .map(|(&stride, &size)| (raw / stride) % size)
                .collect(),
        ))
    }

    #[inline]
    pub fn valid_index_of_raw(&self, raw: usize) -> Option<usize> {
        self.raw_to_valid.get(raw).copied().flatten()
    }

    #[inline]
    pub fn raw_index_of_valid(&self, index: usize) -> Option<usize> {
        self.valid_to_raw.get(index).copied()
    }

    /// Raw index of every valid flag, in valid order.
    pub fn valid_to_raw(&self) -> &[usize] {
        &self.valid_to_raw
    }

    /// Valid index (or `None`) of every raw flag, in raw order.
    pub fn raw_to_valid(&self) -> &[Option<usize>] {
        &self.raw_to_valid
    }

    /// Valid index of the flag obtained from valid flag `index` by putting
    /// `level_index` at level `d`, via raw-index arithmetic.
    pub(crate) fn neighbor(&self, index: usize, d: usize, level_index: usize) -> Option<usize> {
        let flag = self.flags.get(index)?;
        if d >= self.level_sizes.len() || level_index >= self.level_sizes[d] {
            return None;
        }
        let raw = self.valid_to_raw[index] - flag[d] * self.strides[d]
            + level_index * self.strides[d];
        self.raw_to_valid[raw]
    }
}

impl DebugInvariants for FlagSpace {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "FlagSpace");
    }

    fn validate_invariants(&self) -> Result<(), FlagError> {
        if self.flags.len() != self.valid_to_raw.len() {
            return Err(FlagError::EncodingMismatch {
                flag: Flag::default(),
                detail: "valid-flag maps disagree in size".into(),
            });
        }
        for (valid, flag) in self.flags.iter().enumerate() {
            let raw = self.raw_index(flag);
            if raw != Some(self.valid_to_raw[valid])
                || self.raw_to_valid[self.valid_to_raw[valid]] != Some(valid)
            {
                return Err(FlagError::EncodingMismatch {
                    flag: flag.clone(),
                    detail: format!("index maps disagree for valid index {valid}"),
                });
            }
        }
        if !self.valid_to_raw.windows(2).all(|w| w[0] < w[1]) {
            return Err(FlagError::EncodingMismatch {
                flag: Flag::default(),
                detail: "valid flags are not in raw discovery order".into(),
            });
        }
        Ok(())
    }
}

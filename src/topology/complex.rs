//! Reference complexes: the faces of a reference simplex, level by level.
//!
//! A [`ReferenceComplex`] of dimension `n` stores one [`Level`] per dimension
//! `0..n`; level `d` is the ordered list of `d`-dimensional faces. The top
//! simplex itself is implicit. The order of each level is caller-supplied and
//! becomes the canonical index space for that dimension.
//!
//! Construction never fails. Badly sized simplices are reported by
//! [`DebugInvariants::validate_invariants`]; inconsistent nesting is detected
//! downstream, when flags are classified and switched.

use std::collections::HashMap;

use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::flag_error::FlagError;
use crate::topology::simplex::{Label, Simplex};

/// Largest raw candidate space (product of level sizes) a complex may span.
///
/// The 6-simplex (about 2.6e7 raw flags) fits; the 7-simplex does not.
pub const MAX_RAW_FLAGS: usize = 1 << 25;

/// Ordered simplices of one dimension, with an O(1) reverse index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Level {
    simplices: Vec<Simplex>,
    positions: HashMap<Simplex, usize>,
}

impl Level {
    /// Wrap simplices in caller order. For duplicated simplices the first
    /// occurrence owns the reverse lookup.
    pub fn new(simplices: Vec<Simplex>) -> Self {
        let mut positions = HashMap::with_capacity(simplices.len());
        for (i, s) in simplices.iter().enumerate() {
            positions.entry(s.clone()).or_insert(i);
        }
        Self {
            simplices,
            positions,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Simplex> {
        self.simplices.get(index)
    }

    /// Index of `simplex` within this level.
    #[inline]
    pub fn position(&self, simplex: &Simplex) -> Option<usize> {
        self.positions.get(simplex).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    /// True when some simplex appears more than once.
    pub fn has_duplicates(&self) -> bool {
        self.positions.len() != self.simplices.len()
    }
}

impl<'a> IntoIterator for &'a Level {
    type Item = &'a Simplex;
    type IntoIter = std::slice::Iter<'a, Simplex>;
    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}

/// Serializable form of a complex: one list of label sets per level.
///
/// In JSON the triangle reads `[[[0],[1],[2]],[[1,2],[0,2],[0,1]]]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ComplexDescription {
    pub levels: Vec<Vec<Simplex>>,
}

/// The faces of a reference simplex, dimension 0 through `n - 1`.
///
/// Immutable after construction; every derived structure (flag space, flag
/// group, tables) takes it by reference and keeps no pointer back into it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "ComplexDescription", into = "ComplexDescription")]
pub struct ReferenceComplex {
    levels: Vec<Level>,
}

impl ReferenceComplex {
    /// Store `levels` verbatim, level 0 first.
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Build from nested label lists: `sets[d][i]` is simplex `i` of level `d`.
    ///
    /// ```rust
    /// # use mesh_flags::topology::complex::ReferenceComplex;
    /// let tri = ReferenceComplex::from_label_sets(vec![
    ///     vec![vec![0], vec![1], vec![2]],
    ///     vec![vec![1, 2], vec![2, 0], vec![0, 1]],
    /// ]);
    /// assert_eq!(tri.level_count(), 2);
    /// assert!(tri.is_complete());
    /// ```
    pub fn from_label_sets(sets: Vec<Vec<Vec<Label>>>) -> Self {
        let levels = sets
            .into_iter()
            .map(|level| Level::new(level.into_iter().map(Simplex::from).collect()))
            .collect();
        Self { levels }
    }

    /// Canonical complex of the `dimension`-simplex on labels `0..=dimension`.
    ///
    /// Levels below the facets list all subsets of the right size in
    /// lexicographic order. Facet `i` is the facet opposite label `i`. The
    /// 1-simplex has the single level `[{0}, {1}]`.
    pub fn standard(dimension: u8) -> Self {
        let n = dimension as usize;
        let ground: Vec<Label> = (0..=dimension).collect();
        let mut levels = Vec::with_capacity(n);
        for d in 0..n {
            let simplices: Vec<Simplex> = if n >= 2 && d + 1 == n {
                ground
                    .iter()
                    .map(|&opposite| ground.iter().copied().filter(|&l| l != opposite).collect())
                    .collect()
            } else {
                ground
                    .iter()
                    .copied()
                    .combinations(d + 1)
                    .map(Simplex::from)
                    .collect()
            };
            levels.push(Level::new(simplices));
        }
        Self { levels }
    }

    /// [`standard`](Self::standard) for untrusted dimensions: rejects any
    /// dimension whose raw flag space exceeds [`MAX_RAW_FLAGS`] before
    /// building a single level.
    pub fn try_standard(dimension: u8) -> Result<Self, FlagError> {
        within_raw_limit(Self::standard_raw_flag_count(dimension), dimension as usize)?;
        Ok(Self::standard(dimension))
    }

    /// Raw flag count of [`standard`](Self::standard)`(dimension)`, computed
    /// from binomials. `None` on `usize` overflow.
    pub fn standard_raw_flag_count(dimension: u8) -> Option<usize> {
        let n = dimension as usize;
        (0..n).try_fold(1usize, |acc, d| acc.checked_mul(binomial(n + 1, d + 1)?))
    }

    /// Product of the level sizes, rejected above [`MAX_RAW_FLAGS`].
    pub fn raw_flag_count(&self) -> Result<usize, FlagError> {
        let count = self
            .levels
            .iter()
            .try_fold(1usize, |acc, level| acc.checked_mul(level.len()));
        within_raw_limit(count, self.level_count())
    }

    /// Number of levels, which is also the dimension `n` of the top simplex.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Alias for [`level_count`](Self::level_count).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.levels.len()
    }

    /// Size `n + 1` of the ground label set.
    #[inline]
    pub fn label_count(&self) -> usize {
        self.levels.len() + 1
    }

    /// The ground labels `0..=n`.
    pub fn ground_labels(&self) -> impl Iterator<Item = Label> + '_ {
        (0..self.label_count()).map(|l| l as Label)
    }

    #[inline]
    pub fn level(&self, d: usize) -> Option<&Level> {
        self.levels.get(d)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Number of simplices at level `d` (0 past the last level).
    #[inline]
    pub fn level_size(&self, d: usize) -> usize {
        self.levels.get(d).map_or(0, Level::len)
    }

    pub fn level_sizes(&self) -> Vec<usize> {
        self.levels.iter().map(Level::len).collect()
    }

    #[inline]
    pub fn simplex(&self, d: usize, index: usize) -> Option<&Simplex> {
        self.levels.get(d)?.get(index)
    }

    #[inline]
    pub fn position(&self, d: usize, simplex: &Simplex) -> Option<usize> {
        self.levels.get(d)?.position(simplex)
    }

    /// True when no level holds any simplex.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(Level::is_empty)
    }

    /// True when every level `d` holds each `(d + 1)`-subset of the ground
    /// set exactly once, in any order.
    pub fn is_complete(&self) -> bool {
        let labels = self.label_count();
        self.levels.iter().enumerate().all(|(d, level)| {
            Some(level.len()) == binomial(labels, d + 1)
                && !level.has_duplicates()
                && level
                    .iter()
                    .all(|s| s.len() == d + 1 && s.labels().iter().all(|&l| (l as usize) < labels))
        })
    }

    /// Nested label lists, inverse of [`from_label_sets`](Self::from_label_sets).
    pub fn to_label_sets(&self) -> Vec<Vec<Vec<Label>>> {
        self.levels
            .iter()
            .map(|level| level.iter().map(|s| s.labels().to_vec()).collect())
            .collect()
    }
}

impl From<ComplexDescription> for ReferenceComplex {
    fn from(desc: ComplexDescription) -> Self {
        Self::new(desc.levels.into_iter().map(Level::new).collect())
    }
}

impl From<ReferenceComplex> for ComplexDescription {
    fn from(complex: ReferenceComplex) -> Self {
        ComplexDescription {
            levels: complex
                .levels
                .into_iter()
                .map(|level| level.simplices)
                .collect(),
        }
    }
}

impl DebugInvariants for ReferenceComplex {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "ReferenceComplex");
    }

    /// Every level-`d` simplex has `d + 1` labels from the ground set, no
    /// level lists a simplex twice, and the raw flag space stays within
    /// [`MAX_RAW_FLAGS`].
    fn validate_invariants(&self) -> Result<(), FlagError> {
        let labels = self.label_count();
        for (d, level) in self.levels.iter().enumerate() {
            if level.has_duplicates() {
                return Err(FlagError::InvalidComplexDescription(format!(
                    "level {d} lists a simplex twice"
                )));
            }
            for simplex in level {
                if simplex.len() != d + 1 {
                    return Err(FlagError::InvalidComplexDescription(format!(
                        "simplex {simplex} at level {d} has {} labels, expected {}",
                        simplex.len(),
                        d + 1
                    )));
                }
                if let Some(&label) = simplex.labels().iter().find(|&&l| l as usize >= labels) {
                    return Err(FlagError::LabelOutOfRange {
                        label: label as usize,
                        count: labels,
                    });
                }
            }
        }
        self.raw_flag_count()?;
        Ok(())
    }
}

/// `C(n, k)`, or `None` on `usize` overflow.
fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1usize, |acc, i| Some(acc.checked_mul(n - i)? / (i + 1)))
}

fn within_raw_limit(count: Option<usize>, levels: usize) -> Result<usize, FlagError> {
    count
        .filter(|&c| c <= MAX_RAW_FLAGS)
        .ok_or(FlagError::RawSpaceTooLarge {
            levels,
            limit: MAX_RAW_FLAGS,
        })
}

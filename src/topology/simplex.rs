//! `Simplex`: an immutable set of ground labels
//!
//! A reference simplex of dimension `n` has the `n + 1` ground labels
//! `0..=n`. Each of its faces is identified purely combinatorially by the set
//! of labels it spans, independent of any geometry.
//!
//! This module provides:
//! - The [`Label`] alias used for ground labels everywhere in the crate.
//! - A [`Simplex`] newtype storing its labels sorted and deduplicated, so that
//!   equality, hashing and ordering are set semantics.
//! - Subset and difference helpers used by the flag validator and the
//!   simplicial-set codec.

use std::fmt;

/// Identifier of one abstract vertex of the reference simplex.
pub type Label = u8;

/// A face of the reference simplex, as a set of ground labels.
///
/// Two simplices are equal iff their label sets are equal; the order in which
/// labels were supplied is irrelevant.
#[derive(
    Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "Vec<Label>", into = "Vec<Label>")]
pub struct Simplex(Vec<Label>);

impl Simplex {
    /// Build a simplex from labels in any order. Duplicates collapse.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mesh_flags::topology::simplex::Simplex;
    /// let e = Simplex::new([2, 0]);
    /// assert_eq!(e, Simplex::new([0, 2]));
    /// assert_eq!(e.dimension(), Some(1));
    /// ```
    pub fn new<I: IntoIterator<Item = Label>>(labels: I) -> Self {
        let mut labels: Vec<Label> = labels.into_iter().collect();
        labels.sort_unstable();
        labels.dedup();
        Simplex(labels)
    }

    /// Sorted labels of this simplex.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    /// Number of labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Topological dimension (`len - 1`), or `None` for the empty set.
    #[inline]
    pub fn dimension(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    #[inline]
    pub fn contains(&self, label: Label) -> bool {
        self.0.binary_search(&label).is_ok()
    }

    /// True if every label of `self` is a label of `other`.
    pub fn is_subset_of(&self, other: &Simplex) -> bool {
        // both sides are sorted, so a merge walk suffices
        let mut rest = other.0.iter();
        'outer: for a in &self.0 {
            for b in rest.by_ref() {
                if b == a {
                    continue 'outer;
                }
                if b > a {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// Labels of `self` that are not in `other`, in ascending order.
    pub fn difference<'a>(&'a self, other: &'a Simplex) -> impl Iterator<Item = Label> + 'a {
        self.0.iter().copied().filter(move |l| !other.contains(*l))
    }
}

impl From<Vec<Label>> for Simplex {
    fn from(labels: Vec<Label>) -> Self {
        Simplex::new(labels)
    }
}

impl From<Simplex> for Vec<Label> {
    fn from(s: Simplex) -> Self {
        s.0
    }
}

impl<const N: usize> From<[Label; N]> for Simplex {
    fn from(labels: [Label; N]) -> Self {
        Simplex::new(labels)
    }
}

impl FromIterator<Label> for Simplex {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Simplex::new(iter)
    }
}

/// Prints as a set, e.g. `{0, 2}`.
impl fmt::Debug for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

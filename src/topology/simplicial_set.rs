//! `SimplicialSet`: a valid flag written as an ordered permutation of labels.
//!
//! Position `k` holds the label introduced at level `k` of the flag (the last
//! position holds the single label the facet misses). Composition of two
//! sequences is permutation composition, `(p ∘ q)[k] = p[q[k]]`, which gives
//! the valid flags of a complete complex the structure of the symmetric group
//! on the ground labels.

use std::fmt;

use crate::topology::orientation::{Sign, accumulate_path};
use crate::topology::simplex::{Label, Simplex};

/// Ordered sequence of distinct ground labels, a permutation of `0..len`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SimplicialSet(Vec<Label>);

impl SimplicialSet {
    /// Accept `labels` only if they are a permutation of `0..labels.len()`.
    pub fn new(labels: Vec<Label>) -> Option<Self> {
        let mut seen = vec![false; labels.len()];
        for &l in &labels {
            let slot = seen.get_mut(l as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(SimplicialSet(labels))
    }

    /// The ascending sequence `0, 1, …, len - 1`.
    pub fn identity(len: usize) -> Self {
        SimplicialSet((0..len).map(|l| l as Label).collect())
    }

    /// The descending sequence `len - 1, …, 1, 0`.
    pub fn reversed(len: usize) -> Self {
        SimplicialSet((0..len).rev().map(|l| l as Label).collect())
    }

    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(k, &l)| l as usize == k)
    }

    /// `self ∘ other`: position `k` of the result is `self[other[k]]`.
    ///
    /// Returns `None` when the lengths differ.
    pub fn compose(&self, other: &SimplicialSet) -> Option<SimplicialSet> {
        if self.len() != other.len() {
            return None;
        }
        Some(SimplicialSet(
            other.0.iter().map(|&l| self.0[l as usize]).collect(),
        ))
    }

    /// Closed-form inverse permutation. Test oracle only: table inverses come
    /// from the product table.
    #[cfg(test)]
    pub(crate) fn inverse(&self) -> SimplicialSet {
        let mut inv = vec![0 as Label; self.len()];
        for (k, &l) in self.0.iter().enumerate() {
            inv[l as usize] = k as Label;
        }
        SimplicialSet(inv)
    }

    /// Permutation parity, from the cycle decomposition.
    pub fn sign(&self) -> Sign {
        let mut visited = vec![false; self.len()];
        let mut cycle_signs = Vec::new();
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut len = 0usize;
            let mut k = start;
            while !visited[k] {
                visited[k] = true;
                k = self.0[k] as usize;
                len += 1;
            }
            // a cycle of length L is L - 1 transpositions
            cycle_signs.push(Sign(len % 2 == 0));
        }
        accumulate_path(cycle_signs)
    }

    /// Exchange the *values* `a` and `b` wherever they occur.
    pub fn swap_labels(&self, a: Label, b: Label) -> SimplicialSet {
        SimplicialSet(
            self.0
                .iter()
                .map(|&l| match l {
                    l if l == a => b,
                    l if l == b => a,
                    l => l,
                })
                .collect(),
        )
    }

    /// Simplex spanned by the first `d + 1` labels (the level-`d` face).
    pub fn prefix_simplex(&self, d: usize) -> Simplex {
        self.0.iter().take(d + 1).copied().collect()
    }

    /// Length of the longest common prefix with `other`.
    pub fn common_prefix_len(&self, other: &SimplicialSet) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Append `tail` labels, e.g. to lift into a larger ground set.
    pub fn extended<I: IntoIterator<Item = Label>>(&self, tail: I) -> Option<SimplicialSet> {
        let mut labels = self.0.clone();
        labels.extend(tail);
        SimplicialSet::new(labels)
    }
}

impl fmt::Debug for SimplicialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ss(labels: &[Label]) -> SimplicialSet {
        SimplicialSet::new(labels.to_vec()).expect("permutation")
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(SimplicialSet::new(vec![0, 0, 1]).is_none());
        assert!(SimplicialSet::new(vec![0, 3, 1]).is_none());
        assert!(SimplicialSet::new(vec![]).is_some());
    }

    #[test]
    fn compose_applies_right_then_left() {
        let p = ss(&[0, 2, 3, 1]);
        let q = ss(&[0, 1, 3, 2]);
        assert_eq!(p.compose(&q), Some(ss(&[0, 2, 1, 3])));
        assert_eq!(p.compose(&p.inverse()), Some(SimplicialSet::identity(4)));
        assert_eq!(p.compose(&ss(&[0, 1])), None);
    }

    #[test]
    fn sign_of_small_permutations() {
        assert_eq!(SimplicialSet::identity(4).sign(), Sign::EVEN);
        assert_eq!(ss(&[1, 0, 2]).sign(), Sign::ODD);
        assert_eq!(ss(&[1, 2, 0]).sign(), Sign::EVEN);
        assert_eq!(ss(&[3, 0, 1, 2]).sign(), Sign::ODD);
        assert_eq!(SimplicialSet::reversed(4).sign(), Sign::EVEN);
    }

    #[test]
    fn swap_labels_relabels_values() {
        assert_eq!(ss(&[2, 0, 3, 1]).swap_labels(0, 1), ss(&[2, 1, 3, 0]));
    }

    #[test]
    fn prefixes() {
        let p = ss(&[0, 1, 3, 2]);
        assert_eq!(p.prefix_simplex(1), Simplex::from([0, 1]));
        assert_eq!(p.prefix_simplex(2), Simplex::from([0, 1, 3]));
        assert_eq!(p.common_prefix_len(&SimplicialSet::identity(4)), 2);
        assert_eq!(ss(&[1, 0, 2]).extended([3, 4]), Some(ss(&[1, 0, 2, 3, 4])));
    }
}

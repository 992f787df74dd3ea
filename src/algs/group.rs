//! Group algebra over valid flags.
//!
//! Every valid flag is encoded once into its [`SimplicialSet`]; the product of
//! two flags is the composition of their permutations, re-encoded into a
//! valid-flag index. For a complete reference complex the valid flags form
//! the whole symmetric group on the ground labels; for a partial complex a
//! product may leave the flag set, which is reported as an error.

use std::collections::HashMap;

use crate::algs::codec::{flag_to_simplicial_set, simplicial_set_to_flag};
use crate::algs::flags::{Flag, FlagSpace};
use crate::algs::switch::switch;
use crate::debug_invariants::DebugInvariants;
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;
use crate::topology::orientation::Sign;
use crate::topology::simplex::Label;
use crate::topology::simplicial_set::SimplicialSet;

/// Simplicial sets of all valid flags, with the reverse lookup and the
/// identity element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagGroup {
    label_count: usize,
    sequences: Vec<SimplicialSet>,
    lookup: HashMap<SimplicialSet, usize>,
    identity: usize,
}

impl FlagGroup {
    /// Encode every valid flag of `space` and check the codec round trip.
    pub fn new(complex: &ReferenceComplex, space: &FlagSpace) -> Result<Self, FlagError> {
        let mut sequences = Vec::with_capacity(space.len());
        let mut lookup = HashMap::with_capacity(space.len());
        for (i, flag) in space.iter() {
            let sequence = flag_to_simplicial_set(complex, flag)?;
            let decoded = simplicial_set_to_flag(complex, &sequence)?;
            if &decoded != flag {
                return Err(FlagError::EncodingMismatch {
                    flag: flag.clone(),
                    detail: format!("decodes back to {decoded}"),
                });
            }
            if let Some(previous) = lookup.insert(sequence.clone(), i) {
                return Err(FlagError::EncodingMismatch {
                    flag: flag.clone(),
                    detail: format!("shares sequence {sequence:?} with valid flag {previous}"),
                });
            }
            sequences.push(sequence);
        }

        let identity = *lookup
            .get(&SimplicialSet::identity(complex.label_count()))
            .ok_or(FlagError::MissingIdentity)?;
        log::debug!(
            "flag group over {} labels: {} elements, identity {}",
            complex.label_count(),
            sequences.len(),
            identity
        );

        let group = Self {
            label_count: complex.label_count(),
            sequences,
            lookup,
            identity,
        };
        crate::debug_invariants!(group.validate_invariants(), "FlagGroup::new");
        Ok(group)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    #[inline]
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    /// Valid index of the ascending label sequence.
    #[inline]
    pub fn identity(&self) -> usize {
        self.identity
    }

    /// Valid index of the descending label sequence, if it is a valid flag.
    pub fn opposite(&self) -> Option<usize> {
        self.index_of_simplicial_set(&SimplicialSet::reversed(self.label_count))
    }

    #[inline]
    pub fn simplicial_set(&self, index: usize) -> Option<&SimplicialSet> {
        self.sequences.get(index)
    }

    pub fn simplicial_sets(&self) -> &[SimplicialSet] {
        &self.sequences
    }

    /// Valid index of an encoded flag. Equivalent to decoding with
    /// [`simplicial_set_to_flag`] and looking the flag up in the space.
    #[inline]
    pub fn index_of_simplicial_set(&self, sequence: &SimplicialSet) -> Option<usize> {
        self.lookup.get(sequence).copied()
    }

    fn sequence(&self, index: usize) -> Result<&SimplicialSet, FlagError> {
        self.sequences
            .get(index)
            .ok_or(FlagError::FlagIndexOutOfRange {
                index,
                count: self.sequences.len(),
            })
    }

    /// `product(i, j)`: relabel the sequence of `j` through the permutation of
    /// `i`, so position `k` of the result is `p_i[s_j[k]]`.
    pub fn product(&self, i: usize, j: usize) -> Result<usize, FlagError> {
        let p = self.sequence(i)?;
        let s = self.sequence(j)?;
        p.compose(s)
            .and_then(|r| self.index_of_simplicial_set(&r))
            .ok_or(FlagError::ProductOutsideFlagSet { left: i, right: j })
    }

    /// Compose `actions` so that the result, used as the left operand of
    /// [`product`](Self::product), applies them in iteration order.
    pub fn compose_path<I>(&self, actions: I) -> Result<usize, FlagError>
    where
        I: IntoIterator<Item = usize>,
    {
        actions
            .into_iter()
            .try_fold(self.identity, |acc, a| self.product(a, acc))
    }

    /// The action that switches dimension `d`: `product(switch_action(d), f)`
    /// equals `switch(f, d)` for every valid flag `f`.
    pub fn switch_action(
        &self,
        complex: &ReferenceComplex,
        space: &FlagSpace,
        d: usize,
    ) -> Result<usize, FlagError> {
        switch(complex, space, self.identity, d)
    }

    /// Permutation parity of a valid flag.
    pub fn parity(&self, index: usize) -> Result<Sign, FlagError> {
        Ok(self.sequence(index)?.sign())
    }

    /// Exchange labels `a` and `b` in the sequence of `index` and re-encode.
    pub fn mirror(&self, index: usize, a: Label, b: Label) -> Result<usize, FlagError> {
        for label in [a, b] {
            if label as usize >= self.label_count {
                return Err(FlagError::LabelOutOfRange {
                    label: label as usize,
                    count: self.label_count,
                });
            }
        }
        let swapped = self.sequence(index)?.swap_labels(a, b);
        self.index_of_simplicial_set(&swapped)
            .ok_or_else(|| FlagError::EncodingMismatch {
                flag: Flag::default(),
                detail: format!(
                    "mirror image {swapped:?} of valid flag {index} is not a valid flag"
                ),
            })
    }
}

impl DebugInvariants for FlagGroup {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "FlagGroup");
    }

    fn validate_invariants(&self) -> Result<(), FlagError> {
        for (i, s) in self.sequences.iter().enumerate() {
            if s.len() != self.label_count || self.lookup.get(s) != Some(&i) {
                return Err(FlagError::EncodingMismatch {
                    flag: Flag::default(),
                    detail: format!("sequence {s:?} of valid flag {i} is not indexed"),
                });
            }
        }
        match self.sequences.get(self.identity) {
            Some(s) if s.is_identity() => Ok(()),
            _ => Err(FlagError::MissingIdentity),
        }
    }
}

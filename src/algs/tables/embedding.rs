//! Subgroup embedding between flag groups of different dimensions.
//!
//! The labels of a lower-dimensional reference simplex are a prefix of the
//! labels of a higher-dimensional one. A sub-flag lifts to the group flag that
//! appends the missing labels in ascending order; a group flag comes from the
//! subgroup exactly when its sequence ends with that ascending tail.

use crate::algs::group::FlagGroup;
use crate::flag_error::FlagError;
use crate::topology::simplex::Label;
use crate::topology::simplicial_set::SimplicialSet;

/// Two-way map between subgroup and group valid-flag indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubgroupEmbedding {
    sub_labels: usize,
    group_labels: usize,
    sub_to_group: Vec<usize>,
    group_to_sub: Vec<Option<usize>>,
}

impl SubgroupEmbedding {
    pub fn build(sub: &FlagGroup, group: &FlagGroup) -> Result<Self, FlagError> {
        let m = sub.label_count();
        let n = group.label_count();
        if m > n {
            return Err(FlagError::EmbeddingMismatch(format!(
                "subgroup has {m} labels, group only {n}"
            )));
        }
        let tail = || (m..n).map(|l| l as Label);

        let mut sub_to_group = Vec::with_capacity(sub.len());
        for (i, s) in sub.simplicial_sets().iter().enumerate() {
            let lifted = s
                .extended(tail())
                .and_then(|t| group.index_of_simplicial_set(&t))
                .ok_or_else(|| {
                    FlagError::EmbeddingMismatch(format!(
                        "subgroup flag {i} ({s:?}) has no image in the group"
                    ))
                })?;
            sub_to_group.push(lifted);
        }

        let mut group_to_sub = Vec::with_capacity(group.len());
        for t in group.simplicial_sets() {
            let (head, rest) = t.labels().split_at(m);
            let restricted = if rest.iter().copied().eq(tail()) {
                SimplicialSet::new(head.to_vec()).and_then(|h| sub.index_of_simplicial_set(&h))
            } else {
                None
            };
            group_to_sub.push(restricted);
        }

        for (i, &j) in sub_to_group.iter().enumerate() {
            if group_to_sub[j] != Some(i) {
                return Err(FlagError::EmbeddingMismatch(format!(
                    "subgroup flag {i} maps to group flag {j}, which does not map back"
                )));
            }
        }
        log::debug!(
            "embedding: {} of {} group flags come from the {m}-label subgroup",
            sub_to_group.len(),
            group_to_sub.len()
        );

        Ok(Self {
            sub_labels: m,
            group_labels: n,
            sub_to_group,
            group_to_sub,
        })
    }

    /// Label counts `(sub, group)`.
    pub fn label_counts(&self) -> (usize, usize) {
        (self.sub_labels, self.group_labels)
    }

    #[inline]
    pub fn sub_to_group(&self, index: usize) -> Option<usize> {
        self.sub_to_group.get(index).copied()
    }

    /// `None` outside the image of the subgroup.
    #[inline]
    pub fn group_to_sub(&self, index: usize) -> Option<usize> {
        self.group_to_sub.get(index).copied().flatten()
    }

    pub fn sub_to_group_entries(&self) -> &[usize] {
        &self.sub_to_group
    }

    pub fn group_to_sub_entries(&self) -> &[Option<usize>] {
        &self.group_to_sub
    }
}

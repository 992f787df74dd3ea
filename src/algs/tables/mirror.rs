//! Orientation-mirror table: exchange two labels of every flag.
//!
//! With the default pair `(0, 1)` this flips a flag across the first edge of
//! the reference simplex, reversing the traversal direction along that edge.

use crate::algs::group::FlagGroup;
use crate::flag_error::FlagError;
use crate::topology::simplex::Label;

/// `table[i]` = valid index of `i` with labels `a` and `b` exchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MirrorTable {
    labels: (Label, Label),
    entries: Vec<usize>,
}

impl MirrorTable {
    pub fn build(group: &FlagGroup, labels: (Label, Label)) -> Result<Self, FlagError> {
        let entries = (0..group.len())
            .map(|i| group.mirror(i, labels.0, labels.1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels, entries })
    }

    /// The exchanged label pair.
    pub fn labels(&self) -> (Label, Label) {
        self.labels
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

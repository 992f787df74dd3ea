//! Configuration for table construction.

use crate::topology::orientation::Sign;
use crate::topology::simplex::Label;

/// How to pick among face-changing actions with equal preservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum TieBreak {
    /// Highest valid-flag index wins.
    #[default]
    HighestIndex,
    /// Lowest valid-flag index wins.
    LowestIndex,
}

impl TieBreak {
    /// Whether `candidate` replaces `current` when both preserve equally.
    #[inline]
    pub(crate) fn prefers(self, candidate: usize, current: usize) -> bool {
        match self {
            TieBreak::HighestIndex => candidate > current,
            TieBreak::LowestIndex => candidate < current,
        }
    }
}

/// Behavior when a partial complex has no face-changing action for some
/// `(flag, simplex)` pair. Complete complexes always treat this as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum MissingActionHandling {
    /// Record the absent marker silently.
    #[default]
    Absent,
    /// Log a warning and record the absent marker.
    Warn,
    /// Return `FlagError::NoFaceChangingAction`.
    Error,
}

/// Optional toggles for [`FlagTables::build`](super::FlagTables::build).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableOptions {
    /// Labels exchanged by the orientation-mirror table.
    pub mirror_labels: (Label, Label),
    /// Target dimensions of the face-changing tables; `None` builds all.
    pub face_changing_dimensions: Option<Vec<usize>>,
    /// Tie-break among equally preserving face-changing actions.
    pub tie_break: TieBreak,
    /// What to do when a partial complex lacks a face-changing action.
    pub missing_actions: MissingActionHandling,
    /// Restrict anchor flags to this parity when set.
    pub anchor_parity: Option<Sign>,
    /// Build row-parallel tables with rayon (needs the `rayon` feature;
    /// ignored otherwise).
    pub parallel: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            mirror_labels: (0, 1),
            face_changing_dimensions: None,
            tie_break: TieBreak::default(),
            missing_actions: MissingActionHandling::default(),
            anchor_parity: None,
            parallel: false,
        }
    }
}

impl TableOptions {
    /// Strictest settings: missing actions are errors.
    pub fn strict() -> Self {
        Self {
            missing_actions: MissingActionHandling::Error,
            ..Self::default()
        }
    }

    /// These options with face-changing targets at or past `levels` dropped.
    pub(crate) fn for_levels(&self, levels: usize) -> Self {
        Self {
            face_changing_dimensions: self
                .face_changing_dimensions
                .as_ref()
                .map(|dims| dims.iter().copied().filter(|&d| d < levels).collect()),
            ..self.clone()
        }
    }

    /// Face-changing target dimensions for a complex with `levels` levels.
    pub(crate) fn face_changing_targets(&self, levels: usize) -> Vec<usize> {
        match &self.face_changing_dimensions {
            Some(dims) => dims.clone(),
            None => (0..levels).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_break_preferences() {
        assert!(TieBreak::HighestIndex.prefers(5, 4));
        assert!(!TieBreak::HighestIndex.prefers(4, 5));
        assert!(TieBreak::LowestIndex.prefers(4, 5));
    }

    #[test]
    fn default_targets_cover_every_level() {
        let opts = TableOptions::default();
        assert_eq!(opts.face_changing_targets(3), vec![0, 1, 2]);
        let only_faces = TableOptions {
            face_changing_dimensions: Some(vec![2]),
            ..TableOptions::default()
        };
        assert_eq!(only_faces.face_changing_targets(3), vec![2]);
        assert_eq!(only_faces.for_levels(2).face_changing_targets(2), Vec::<usize>::new());
        assert_eq!(opts.for_levels(2), opts);
        assert_eq!(TableOptions::strict().missing_actions, MissingActionHandling::Error);
    }
}

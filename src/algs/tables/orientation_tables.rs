//! Per-flag orientation data: parity, primitive actions and anchor flags.

use crate::algs::flags::FlagSpace;
use crate::algs::group::FlagGroup;
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;
use crate::topology::orientation::Sign;

/// `table[i]` = permutation parity of valid flag `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ParityTable {
    entries: Vec<Sign>,
}

impl ParityTable {
    pub fn build(group: &FlagGroup) -> Result<Self, FlagError> {
        let entries = (0..group.len())
            .map(|i| group.parity(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Sign> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[Sign] {
        &self.entries
    }

    /// `0` for even flags, `1` for odd ones.
    pub fn bits(&self) -> Vec<u8> {
        self.entries.iter().map(|s| s.is_odd() as u8).collect()
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

/// Group elements from which every other flag is reached: one switch action
/// per dimension, the identity and the opposite (descending) flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PrimitiveActions {
    pub switches: Vec<usize>,
    pub identity: Option<usize>,
    pub opposite: Option<usize>,
}

impl PrimitiveActions {
    pub fn build(
        complex: &ReferenceComplex,
        space: &FlagSpace,
        group: &FlagGroup,
    ) -> Result<Self, FlagError> {
        let switches = (0..complex.level_count())
            .map(|d| group.switch_action(complex, space, d))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            switches,
            identity: Some(group.identity()),
            opposite: group.opposite(),
        })
    }

    /// Switch actions followed by the identity and the opposite flag, the
    /// layout used for flat emission. Absent entries are skipped.
    pub fn flattened(&self) -> Vec<usize> {
        self.switches
            .iter()
            .copied()
            .chain(self.identity)
            .chain(self.opposite)
            .collect()
    }
}

/// `anchors[d][s]` = a canonical valid flag choosing simplex `s` at level `d`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AnchorTable {
    anchors: Vec<Vec<Option<usize>>>,
}

impl AnchorTable {
    /// Pick the lowest valid flag through each simplex. With `parity` set,
    /// only flags of that parity are considered.
    pub fn build(
        complex: &ReferenceComplex,
        space: &FlagSpace,
        parity: Option<(&ParityTable, Sign)>,
    ) -> Self {
        let mut anchors: Vec<Vec<Option<usize>>> = complex
            .level_sizes()
            .into_iter()
            .map(|n| vec![None; n])
            .collect();
        for (i, flag) in space.iter() {
            if let Some((table, wanted)) = parity {
                if table.get(i) != Some(wanted) {
                    continue;
                }
            }
            for (d, &s) in flag.iter().enumerate() {
                anchors[d][s].get_or_insert(i);
            }
        }
        let missing = anchors.iter().flatten().filter(|a| a.is_none()).count();
        if missing > 0 {
            log::debug!("anchor table: {missing} simplices lie on no eligible flag");
        }
        Self { anchors }
    }

    #[inline]
    pub fn get(&self, d: usize, simplex: usize) -> Option<usize> {
        self.anchors.get(d)?.get(simplex).copied().flatten()
    }

    pub fn level(&self, d: usize) -> Option<&[Option<usize>]> {
        self.anchors.get(d).map(Vec::as_slice)
    }

    pub fn levels(&self) -> &[Vec<Option<usize>>] {
        &self.anchors
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.anchors.len()
    }
}

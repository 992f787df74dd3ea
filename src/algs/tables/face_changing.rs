//! Face-changing ("subdart") tables.
//!
//! For a target dimension `d`, row `f` column `s` holds the action `a` for
//! which `product(f, a)` chooses simplex `s` at level `d`, picked to keep as
//! many leading levels of `f` as possible. The number of kept levels is the
//! *preservation* of the action and is tabulated alongside it.
//!
//! When `s` is already the level-`d` simplex of `f`, the identity is the only
//! action that keeps every level, so it always wins.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::algs::flags::FlagSpace;
use crate::algs::group::FlagGroup;
use crate::algs::tables::options::{MissingActionHandling, TableOptions, TieBreak};
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;

/// Number of leading levels on which two flags choose the same simplex.
#[inline]
pub fn preserved_levels(a: &[usize], b: &[usize]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Best action per `[flag][simplex]` for one target dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FaceChangingTable {
    dimension: usize,
    actions: Vec<Vec<Option<usize>>>,
    preservation: Vec<Vec<Option<usize>>>,
}

type Row = (Vec<Option<usize>>, Vec<Option<usize>>);

impl FaceChangingTable {
    pub fn build(
        complex: &ReferenceComplex,
        space: &FlagSpace,
        group: &FlagGroup,
        d: usize,
        options: &TableOptions,
    ) -> Result<Self, FlagError> {
        let level = complex.level(d).ok_or(FlagError::LevelOutOfRange {
            level: d,
            levels: complex.level_count(),
        })?;
        let targets = level.len();
        let complete = complex.is_complete();
        let tie_break = options.tie_break;

        let row = |f: usize| -> Result<Row, FlagError> {
            let (actions, preservation) = best_actions(space, group, f, d, targets, tie_break)?;
            for (s, a) in actions.iter().enumerate() {
                if a.is_some() {
                    continue;
                }
                let err = FlagError::NoFaceChangingAction {
                    flag: f,
                    dimension: d,
                    simplex: s,
                };
                match options.missing_actions {
                    _ if complete => return Err(err),
                    MissingActionHandling::Error => return Err(err),
                    MissingActionHandling::Warn => log::warn!("{err}"),
                    MissingActionHandling::Absent => {}
                }
            }
            Ok((actions, preservation))
        };

        #[cfg(feature = "rayon")]
        let rows: Vec<Row> = if options.parallel {
            (0..space.len()).into_par_iter().map(row).collect::<Result<_, _>>()?
        } else {
            (0..space.len()).map(row).collect::<Result<_, _>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let rows: Vec<Row> = (0..space.len()).map(row).collect::<Result<_, _>>()?;

        let (actions, preservation): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        log::debug!(
            "face-changing table for dimension {d}: {} x {targets}",
            actions.len()
        );
        Ok(Self {
            dimension: d,
            actions,
            preservation,
        })
    }

    /// Target dimension of this table.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn action(&self, flag: usize, simplex: usize) -> Option<usize> {
        self.actions.get(flag)?.get(simplex).copied().flatten()
    }

    #[inline]
    pub fn preservation(&self, flag: usize, simplex: usize) -> Option<usize> {
        self.preservation.get(flag)?.get(simplex).copied().flatten()
    }

    pub fn actions(&self) -> &[Vec<Option<usize>>] {
        &self.actions
    }

    pub fn preservations(&self) -> &[Vec<Option<usize>>] {
        &self.preservation
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of absent entries.
    pub fn absent_count(&self) -> usize {
        self.actions.iter().flatten().filter(|a| a.is_none()).count()
    }
}

/// Scan every candidate action once, bucketing results by their level-`d`
/// simplex.
fn best_actions(
    space: &FlagSpace,
    group: &FlagGroup,
    f: usize,
    d: usize,
    targets: usize,
    tie_break: TieBreak,
) -> Result<Row, FlagError> {
    let flag = space.try_flag_of(f)?;
    let mut best: Vec<Option<(usize, usize)>> = vec![None; targets];

    for a in 0..group.len() {
        let r = match group.product(f, a) {
            Ok(r) => r,
            Err(FlagError::ProductOutsideFlagSet { .. }) => continue,
            Err(e) => return Err(e),
        };
        let result = space.try_flag_of(r)?;
        let s = result[d];
        let kept = preserved_levels(flag, result);
        let slot = &mut best[s];
        let replace = match *slot {
            None => true,
            Some((current, current_kept)) => {
                kept > current_kept || (kept == current_kept && tie_break.prefers(a, current))
            }
        };
        if replace {
            *slot = Some((a, kept));
        }
    }
    log::trace!("face-changing row {f} (dimension {d}): {best:?}");

    Ok(best
        .into_iter()
        .map(|b| (b.map(|(a, _)| a), b.map(|(_, k)| k)))
        .unzip())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> (ReferenceComplex, FlagSpace, FlagGroup) {
        let complex = ReferenceComplex::standard(3);
        let space = FlagSpace::new(&complex).unwrap();
        let group = FlagGroup::new(&complex, &space).unwrap();
        (complex, space, group)
    }

    fn dense(rows: &[Vec<Option<usize>>]) -> Vec<Vec<usize>> {
        rows.iter()
            .map(|r| r.iter().map(|a| a.unwrap()).collect())
            .collect()
    }

    #[test]
    fn tetrahedron_face_rows() {
        let (complex, space, group) = tetrahedron();
        let table =
            FaceChangingTable::build(&complex, &space, &group, 2, &TableOptions::default())
                .unwrap();
        let actions = dense(table.actions());
        let kept = dense(table.preservations());
        assert_eq!(actions[0], vec![22, 4, 1, 0]);
        assert_eq!(kept[0], vec![0, 1, 3, 2]);
        assert_eq!(actions[1], vec![22, 4, 0, 1]);
        assert_eq!(actions[9], vec![0, 22, 4, 1]);
        assert_eq!(kept[9], vec![2, 0, 1, 3]);
        assert_eq!(actions[23], vec![0, 1, 4, 22]);
        assert_eq!(kept[23], vec![2, 3, 1, 0]);
    }

    #[test]
    fn tetrahedron_edge_rows() {
        let (complex, space, group) = tetrahedron();
        let table =
            FaceChangingTable::build(&complex, &space, &group, 1, &TableOptions::default())
                .unwrap();
        let actions = dense(table.actions());
        let kept = dense(table.preservations());
        assert_eq!(actions[0], vec![1, 5, 3, 21, 15, 23]);
        assert_eq!(kept[0], vec![3, 1, 1, 0, 0, 0]);
        assert_eq!(actions[14], vec![21, 5, 23, 1, 15, 3]);
        assert_eq!(kept[14], vec![0, 1, 0, 3, 0, 1]);
        assert_eq!(actions[22], vec![23, 21, 5, 15, 3, 1]);
    }

    #[test]
    fn actions_land_on_their_target() {
        let (complex, space, group) = tetrahedron();
        for d in 0..3 {
            let table =
                FaceChangingTable::build(&complex, &space, &group, d, &TableOptions::default())
                    .unwrap();
            assert_eq!(table.absent_count(), 0);
            for f in 0..space.len() {
                let own = space.flag_of(f).unwrap()[d];
                for s in 0..complex.level_size(d) {
                    let a = table.action(f, s).unwrap();
                    let r = group.product(f, a).unwrap();
                    assert_eq!(space.flag_of(r).unwrap()[d], s);
                    if s == own {
                        assert_eq!(a, group.identity());
                        assert_eq!(table.preservation(f, s), Some(3));
                    }
                }
            }
        }
    }

    #[test]
    fn preservation_is_the_shared_label_prefix() {
        let (complex, space, group) = tetrahedron();
        let table =
            FaceChangingTable::build(&complex, &space, &group, 1, &TableOptions::default())
                .unwrap();
        for f in 0..space.len() {
            for s in 0..complex.level_size(1) {
                let r = group.product(f, table.action(f, s).unwrap()).unwrap();
                let shared = group
                    .simplicial_set(f)
                    .unwrap()
                    .common_prefix_len(group.simplicial_set(r).unwrap());
                assert_eq!(table.preservation(f, s), Some(shared.min(3)));
            }
        }
    }

    #[test]
    fn lowest_index_tie_break_still_preserves_equally() {
        let (complex, space, group) = tetrahedron();
        let high =
            FaceChangingTable::build(&complex, &space, &group, 2, &TableOptions::default())
                .unwrap();
        let low_opts = TableOptions {
            tie_break: TieBreak::LowestIndex,
            ..TableOptions::default()
        };
        let low = FaceChangingTable::build(&complex, &space, &group, 2, &low_opts).unwrap();
        assert_eq!(high.preservations(), low.preservations());
        for f in 0..space.len() {
            for s in 0..4 {
                assert!(low.action(f, s).unwrap() <= high.action(f, s).unwrap());
            }
        }
    }

    #[test]
    fn level_out_of_range() {
        let (complex, space, group) = tetrahedron();
        assert_eq!(
            FaceChangingTable::build(&complex, &space, &group, 3, &TableOptions::default()),
            Err(FlagError::LevelOutOfRange { level: 3, levels: 3 })
        );
    }

    #[test]
    fn preserved_levels_counts_leading_agreement() {
        assert_eq!(preserved_levels(&[0, 1, 2], &[0, 1, 2]), 3);
        assert_eq!(preserved_levels(&[0, 1, 2], &[0, 4, 2]), 1);
        assert_eq!(preserved_levels(&[3, 1, 2], &[0, 1, 2]), 0);
    }
}

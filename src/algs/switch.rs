//! The switch operator: walking to the neighboring flag at one dimension.
//!
//! In a flag complex every chain has exactly two completions at each rank, so
//! for a valid flag `f` and a dimension `d` there is exactly one other valid
//! flag that differs from `f` only at level `d`. Finding zero or several such
//! partners means the level definitions are malformed.

use crate::algs::flags::FlagSpace;
use crate::flag_error::FlagError;
use crate::topology::complex::ReferenceComplex;

/// Valid index of the unique flag differing from valid flag `index` only at
/// level `d`.
///
/// Only the neighbors of level `d` have to be re-checked: the rest of the
/// chain is untouched and already nested.
pub fn switch(
    complex: &ReferenceComplex,
    space: &FlagSpace,
    index: usize,
    d: usize,
) -> Result<usize, FlagError> {
    let flag = space.try_flag_of(index)?;
    let levels = complex.level_count();
    if d >= levels {
        return Err(FlagError::LevelOutOfRange { level: d, levels });
    }

    let below = d.checked_sub(1).map(|b| (b, flag[b]));
    let above = (d + 1 < levels).then(|| (d + 1, flag[d + 1]));
    let mut partner = None;
    let mut partners = 0usize;
    for k in 0..complex.level_size(d) {
        if k == flag[d] {
            continue;
        }
        let Some(candidate) = complex.simplex(d, k) else {
            continue;
        };
        let fits_below = below.is_none_or(|(b, i)| {
            complex
                .simplex(b, i)
                .is_some_and(|s| s.is_subset_of(candidate))
        });
        let fits_above = above.is_none_or(|(a, i)| {
            complex
                .simplex(a, i)
                .is_some_and(|s| candidate.is_subset_of(s))
        });
        if fits_below && fits_above {
            partners += 1;
            partner = Some(k);
        }
    }

    match (partners, partner) {
        (1, Some(k)) => space
            .neighbor(index, d, k)
            .ok_or_else(|| FlagError::MalformedComplex {
                flag: flag.clone(),
                dimension: d,
                partners: 0,
            }),
        _ => Err(FlagError::MalformedComplex {
            flag: flag.clone(),
            dimension: d,
            partners,
        }),
    }
}

/// Apply a sequence of switches, left to right.
pub fn switch_path<I>(
    complex: &ReferenceComplex,
    space: &FlagSpace,
    index: usize,
    dimensions: I,
) -> Result<usize, FlagError>
where
    I: IntoIterator<Item = usize>,
{
    dimensions
        .into_iter()
        .try_fold(index, |current, d| switch(complex, space, current, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::complex::ReferenceComplex;

    #[test]
    fn triangle_vertex_switch_keeps_edge() {
        let tri = ReferenceComplex::from_label_sets(vec![
            vec![vec![0], vec![1], vec![2]],
            vec![vec![1, 2], vec![2, 0], vec![0, 1]],
        ]);
        let space = FlagSpace::new(&tri).unwrap();
        let f = space.index_of(&[0, 2]).unwrap();
        let g = switch(&tri, &space, f, 0).unwrap();
        assert_eq!(space.flag_of(g).unwrap().indices(), &[1, 2]);
        let h = switch(&tri, &space, f, 1).unwrap();
        assert_eq!(space.flag_of(h).unwrap().indices(), &[0, 1]);
    }

    #[test]
    fn switch_is_an_involution_on_tetrahedron() {
        let tet = ReferenceComplex::standard(3);
        let space = FlagSpace::new(&tet).unwrap();
        for i in 0..space.len() {
            for d in 0..3 {
                let j = switch(&tet, &space, i, d).unwrap();
                assert_ne!(i, j);
                assert_eq!(switch(&tet, &space, j, d).unwrap(), i);
            }
        }
    }

    #[test]
    fn missing_edge_is_malformed() {
        // edge {0,1} missing: vertex 0 inside edge {0,2} has no partner
        let broken = ReferenceComplex::from_label_sets(vec![
            vec![vec![0], vec![1], vec![2]],
            vec![vec![1, 2], vec![0, 2]],
        ]);
        let space = FlagSpace::new(&broken).unwrap();
        let f = space.index_of(&[0, 1]).unwrap();
        let err = switch(&broken, &space, f, 1).unwrap_err();
        assert_eq!(
            err,
            FlagError::MalformedComplex {
                flag: vec![0, 1].into(),
                dimension: 1,
                partners: 0,
            }
        );
    }

    #[test]
    fn duplicated_edge_is_malformed() {
        let doubled = ReferenceComplex::from_label_sets(vec![
            vec![vec![0], vec![1], vec![2]],
            vec![vec![1, 2], vec![0, 2], vec![0, 1], vec![0, 1]],
        ]);
        let space = FlagSpace::new(&doubled).unwrap();
        let f = space.index_of(&[0, 1]).unwrap();
        assert!(matches!(
            switch(&doubled, &space, f, 1),
            Err(FlagError::MalformedComplex { partners: 2, .. })
        ));
    }

    #[test]
    fn out_of_range_arguments() {
        let tri = ReferenceComplex::standard(2);
        let space = FlagSpace::new(&tri).unwrap();
        assert!(matches!(
            switch(&tri, &space, 0, 2),
            Err(FlagError::LevelOutOfRange { level: 2, levels: 2 })
        ));
        assert!(matches!(
            switch(&tri, &space, 6, 0),
            Err(FlagError::FlagIndexOutOfRange { index: 6, count: 6 })
        ));
    }

    #[test]
    fn path_of_switches() {
        let tri = ReferenceComplex::standard(2);
        let space = FlagSpace::new(&tri).unwrap();
        // (s0 s1) has order 3 on a triangle
        let start = 0;
        let back = switch_path(&tri, &space, start, [0, 1, 0, 1, 0, 1]).unwrap();
        assert_eq!(back, start);
        let moved = switch_path(&tri, &space, start, [0, 1]).unwrap();
        assert_ne!(moved, start);
    }
}

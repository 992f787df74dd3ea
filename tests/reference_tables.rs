use mesh_flags::algs::flags::FlagSpace;
use mesh_flags::algs::switch::switch;
use mesh_flags::prelude::*;

fn tetrahedron() -> FlagTables {
    FlagTables::build_standard(SimplexType::Tetrahedron, &TableOptions::default())
        .expect("tetrahedron tables")
}

#[test]
fn valid_flag_counts_are_factorials() {
    for (ty, count) in [
        (SimplexType::Vertex, 1),
        (SimplexType::Edge, 2),
        (SimplexType::Triangle, 6),
        (SimplexType::Tetrahedron, 24),
        (SimplexType::Simplex(4), 120),
    ] {
        let complex = ty.reference_complex();
        assert_eq!(FlagSpace::new(&complex).unwrap().len(), count, "{}", ty.name());
        assert_eq!(ty.flag_count(), count);
    }
}

#[test]
fn triangle_vertex_switch_scenario() {
    let tri = ReferenceComplex::from_label_sets(vec![
        vec![vec![0], vec![1], vec![2]],
        vec![vec![1, 2], vec![2, 0], vec![0, 1]],
    ]);
    let space = FlagSpace::new(&tri).unwrap();
    assert_eq!(space.len(), 6);
    let f = space.index_of(&[0, 2]).expect("vertex {0} lies on edge {0,1}");
    let g = switch(&tri, &space, f, 0).unwrap();
    assert_eq!(space.flag_of(g).unwrap().indices(), &[1, 2]);
}

#[test]
fn tetrahedron_valid_flags_in_order() {
    let tables = tetrahedron();
    let flags: Vec<Vec<usize>> = tables
        .valid_flags
        .iter()
        .map(|f| f.indices().to_vec())
        .collect();
    #[rustfmt::skip]
    let expected: Vec<Vec<usize>> = vec![
        vec![0, 0, 2], vec![0, 0, 3], vec![0, 1, 1], vec![0, 1, 3], vec![0, 2, 1], vec![0, 2, 2],
        vec![1, 0, 2], vec![1, 0, 3], vec![1, 3, 0], vec![1, 3, 3], vec![1, 4, 0], vec![1, 4, 2],
        vec![2, 1, 1], vec![2, 1, 3], vec![2, 3, 0], vec![2, 3, 3], vec![2, 5, 0], vec![2, 5, 1],
        vec![3, 2, 1], vec![3, 2, 2], vec![3, 4, 0], vec![3, 4, 2], vec![3, 5, 0], vec![3, 5, 1],
    ];
    assert_eq!(flags, expected);
    for (valid, &raw) in tables.valid_to_raw.iter().enumerate() {
        assert_eq!(tables.raw_to_valid[raw], Some(valid));
    }
    assert_eq!(tables.raw_to_valid.iter().flatten().count(), tables.len());
}

#[test]
fn tetrahedron_reference_tables() {
    let tables = tetrahedron();
    assert_eq!(tables.actions.switches, vec![7, 3, 0]);
    assert_eq!(tables.actions.identity, Some(1));
    assert_eq!(tables.actions.opposite, Some(22));
    assert_eq!(
        tables.inverse.entries(),
        &[0, 1, 5, 3, 4, 2, 6, 7, 19, 13, 18, 12, 11, 9, 21, 15, 23, 17, 10, 8, 20, 14, 22, 16]
    );
    assert_eq!(
        tables.mirror.as_ref().unwrap().entries(),
        &[6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 14, 15, 12, 13, 17, 16, 20, 21, 18, 19, 23, 22]
    );
    let vertices = tables.face_changing_for(0).unwrap();
    assert_eq!(vertices.absent_count(), 0);
    for f in 0..tables.len() {
        let own = tables.valid_flags[f][0];
        assert_eq!(vertices.action(f, own), Some(1));
    }
}

#[test]
fn group_laws_hold_up_to_the_four_simplex() {
    for n in 1..=4u8 {
        let ty = SimplexType::from_dimension(n);
        let tables = FlagTables::build_standard(ty, &TableOptions::default()).unwrap();
        let id = tables.actions.identity.unwrap();
        for f in 0..tables.len() {
            assert_eq!(tables.product.get(id, f), Some(f));
            assert_eq!(tables.product.get(f, id), Some(f));
            let inv = tables.inverse.get(f).unwrap();
            assert_eq!(tables.product.get(f, inv), Some(id));
            assert_eq!(tables.product.get(inv, f), Some(id));
            for d in 0..n as usize {
                let g = tables.switch.get(f, d).unwrap();
                assert_ne!(g, f);
                assert_eq!(tables.switch.get(g, d), Some(f));
                assert_eq!(tables.product.get(tables.actions.switches[d], f), Some(g));
            }
        }
        tables.validate_invariants().unwrap();
    }
}

#[test]
fn codec_round_trips_every_flag() {
    for n in 0..=4u8 {
        let complex = ReferenceComplex::standard(n);
        let space = FlagSpace::new(&complex).unwrap();
        for (_, flag) in space.iter() {
            let s = flag_to_simplicial_set(&complex, flag).unwrap();
            assert_eq!(&simplicial_set_to_flag(&complex, &s).unwrap(), flag);
        }
    }
}

#[test]
fn relabelled_triangle_matches_standard_algebra() {
    // same faces as the standard triangle, listed in another order
    let tri = ReferenceComplex::from_label_sets(vec![
        vec![vec![2], vec![0], vec![1]],
        vec![vec![0, 1], vec![1, 2], vec![0, 2]],
    ]);
    let tables = FlagTables::build("shuffled", &tri, &TableOptions::default()).unwrap();
    let standard =
        FlagTables::build_standard(SimplexType::Triangle, &TableOptions::default()).unwrap();
    assert_eq!(tables.len(), 6);
    let mut ours = tables.simplicial_sets.clone();
    let mut theirs = standard.simplicial_sets.clone();
    ours.sort_by(|a, b| a.labels().cmp(b.labels()));
    theirs.sort_by(|a, b| a.labels().cmp(b.labels()));
    assert_eq!(ours, theirs);
    tables.validate_invariants().unwrap();
}

use mesh_flags::prelude::*;
use static_assertions::{assert_eq_size, assert_impl_all};

assert_impl_all!(FlagTables: Send, Sync, Clone, serde::Serialize);
assert_impl_all!(TableSuite: Send, Sync);
assert_impl_all!(FlagError: std::error::Error, Send, Sync, Clone);
assert_eq_size!(Sign, bool);

#[test]
fn json_description_to_tables_and_back() {
    let text = "[[[0],[1],[2]],[[1,2],[2,0],[0,1]]]";
    let complex = JsonComplexReader.read_str(text).unwrap();
    assert_eq!(serde_json::to_string(&complex).unwrap(), "[[[0],[1],[2]],[[1,2],[0,2],[0,1]]]");

    let tables = FlagTables::build("triangle", &complex, &TableOptions::default()).unwrap();
    let mut buf = Vec::new();
    JsonTableWriter::pretty().write(&mut buf, &tables).unwrap();
    let back: FlagTables = serde_json::from_slice(&buf).unwrap();
    assert_eq!(back, tables);
    assert_eq!(back.complex, ReferenceComplex::standard(2));
}

#[test]
fn reader_accepts_files() {
    let path = std::env::temp_dir().join(format!("mesh-flags-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"standard": 2}"#).unwrap();
    let complex = JsonComplexReader
        .read(std::fs::File::open(&path).unwrap())
        .unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(complex.level_sizes(), vec![3, 3]);
}

#[test]
fn rust_source_for_a_suite() {
    let suite = TableSuite::build(
        &[SimplexType::Edge, SimplexType::Triangle, SimplexType::Tetrahedron],
        &TableOptions::default(),
    )
    .unwrap();
    let mut buf = Vec::new();
    RustSourceWriter::default().write_suite(&mut buf, &suite).unwrap();
    let src = String::from_utf8(buf).unwrap();

    assert!(src.contains("pub const EDGE_SWITCH: [[i64; 1]; 2] = ["));
    assert!(src.contains(
        "pub const TETRAHEDRON_INVERSE: [i64; 24] = [0, 1, 5, 3, 4, 2, 6, 7, 19, 13, 18, 12, 11, 9, 21, 15, 23, 17, 10, 8, 20, 14, 22, 16];"
    ));
    assert!(src.contains(
        "pub const TETRAHEDRON_FACE_CHANGING_ACTION_2: [[i64; 4]; 24] = [\n    [22, 4, 1, 0],"
    ));
    assert!(src.contains("pub const EDGE_TO_TRIANGLE: [i64; 2]"));
    assert!(src.contains("pub const TETRAHEDRON_TO_TRIANGLE: [i64; 24] = [-1,"));
    // every const line is followed by a well-formed body
    let consts = src.lines().filter(|l| l.starts_with("pub const")).count();
    let closed = src.lines().filter(|l| l.ends_with("];")).count();
    assert_eq!(consts, closed);
}

#[test]
fn writer_failures_surface_as_io_errors() {
    struct Full;
    impl std::io::Write for Full {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no space"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let tables =
        FlagTables::build_standard(SimplexType::Edge, &TableOptions::default()).unwrap();
    assert!(matches!(
        RustSourceWriter::default().write(Full, &tables),
        Err(FlagError::Io(_))
    ));
}

//! Emit tables as Rust `const` array literals.
//!
//! Every table becomes one `pub const` named `{PREFIX}_{TABLE}`, where the
//! prefix is the upper-cased table name. Absent entries are written as `-1`,
//! so the element type is always signed.

use std::io::Write;

use itertools::Itertools;

use crate::algs::tables::{FlagTables, NamedEmbedding, TableSuite};
use crate::flag_error::FlagError;
use crate::io::TableWriter;

/// Signed integer type of emitted elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    #[default]
    I64,
}

impl IntWidth {
    pub fn name(self) -> &'static str {
        match self {
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
        }
    }

    fn max(self) -> i64 {
        match self {
            IntWidth::I8 => i8::MAX as i64,
            IntWidth::I16 => i16::MAX as i64,
            IntWidth::I32 => i32::MAX as i64,
            IntWidth::I64 => i64::MAX,
        }
    }
}

/// Writes `pub const` arrays, one per table.
#[derive(Debug, Clone, Default)]
pub struct RustSourceWriter {
    pub width: IntWidth,
}

impl RustSourceWriter {
    pub fn new(width: IntWidth) -> Self {
        Self { width }
    }

    fn value(&self, v: Option<usize>) -> Result<i64, FlagError> {
        match v {
            None => Ok(-1),
            Some(v) => i64::try_from(v)
                .ok()
                .filter(|&v| v <= self.width.max())
                .ok_or_else(|| {
                    FlagError::Serialization(format!(
                        "value {v} does not fit in {}",
                        self.width.name()
                    ))
                }),
        }
    }

    fn row<I>(&self, values: I) -> Result<(usize, String), FlagError>
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        let values = values
            .into_iter()
            .map(|v| self.value(v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((values.len(), format!("[{}]", values.iter().join(", "))))
    }

    fn write_1d<W, I>(&self, w: &mut W, name: &str, values: I) -> Result<(), FlagError>
    where
        W: Write,
        I: IntoIterator<Item = Option<usize>>,
    {
        let (len, body) = self.row(values)?;
        writeln!(w, "pub const {name}: [{}; {len}] = {body};", self.width.name())?;
        Ok(())
    }

    /// `columns` fixes the inner length, which cannot be read off an empty
    /// table.
    fn write_2d<W, R, I>(
        &self,
        w: &mut W,
        name: &str,
        columns: usize,
        rows: R,
    ) -> Result<(), FlagError>
    where
        W: Write,
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Option<usize>>,
    {
        let mut bodies = Vec::new();
        for row in rows {
            let (len, body) = self.row(row)?;
            if len != columns {
                return Err(FlagError::Serialization(format!(
                    "{name}: row {} has {len} entries, expected {columns}",
                    bodies.len()
                )));
            }
            bodies.push(body);
        }
        writeln!(
            w,
            "pub const {name}: [[{}; {columns}]; {}] = [",
            self.width.name(),
            bodies.len()
        )?;
        for body in &bodies {
            writeln!(w, "    {body},")?;
        }
        writeln!(w, "];")?;
        Ok(())
    }

    fn write_tables<W: Write>(&self, w: &mut W, t: &FlagTables) -> Result<(), FlagError> {
        let p = t.name.to_uppercase();
        let levels = t.complex.level_count();
        let some = |v: &usize| Some(*v);

        writeln!(w, "// {}: {} valid flags over {} levels", t.name, t.len(), levels)?;
        self.write_2d(
            w,
            &format!("{p}_VALID_FLAGS"),
            levels,
            t.valid_flags.iter().map(|f| f.iter().map(some)),
        )?;
        self.write_2d(
            w,
            &format!("{p}_SIMPLICIAL_SETS"),
            t.complex.label_count(),
            t.simplicial_sets
                .iter()
                .map(|s| s.labels().iter().map(|&l| Some(l as usize))),
        )?;
        self.write_1d(w, &format!("{p}_VALID_TO_RAW"), t.valid_to_raw.iter().map(some))?;
        self.write_1d(w, &format!("{p}_RAW_TO_VALID"), t.raw_to_valid.iter().copied())?;
        self.write_2d(
            w,
            &format!("{p}_SWITCH"),
            levels,
            t.switch.rows().iter().map(|r| r.iter().map(some)),
        )?;
        self.write_2d(
            w,
            &format!("{p}_PRODUCT"),
            t.len(),
            t.product.rows().iter().map(|r| r.iter().map(some)),
        )?;
        self.write_1d(w, &format!("{p}_INVERSE"), t.inverse.entries().iter().map(some))?;
        self.write_1d(
            w,
            &format!("{p}_PRIMITIVE_ACTIONS"),
            t.actions
                .switches
                .iter()
                .map(some)
                .chain([t.actions.identity, t.actions.opposite]),
        )?;
        self.write_1d(
            w,
            &format!("{p}_PARITY"),
            t.parity.bits().into_iter().map(|b| Some(b as usize)),
        )?;
        if let Some(mirror) = &t.mirror {
            self.write_1d(w, &format!("{p}_MIRROR"), mirror.entries().iter().map(some))?;
        }
        for (d, level) in t.anchors.levels().iter().enumerate() {
            self.write_1d(w, &format!("{p}_ANCHORS_{d}"), level.iter().copied())?;
        }
        for table in &t.face_changing {
            let d = table.dimension();
            let columns = t.complex.level_size(d);
            self.write_2d(
                w,
                &format!("{p}_FACE_CHANGING_ACTION_{d}"),
                columns,
                table.actions().iter().map(|r| r.iter().copied()),
            )?;
            self.write_2d(
                w,
                &format!("{p}_FACE_CHANGING_PRESERVATION_{d}"),
                columns,
                table.preservations().iter().map(|r| r.iter().copied()),
            )?;
        }
        Ok(())
    }

    fn write_embedding<W: Write>(&self, w: &mut W, e: &NamedEmbedding) -> Result<(), FlagError> {
        let sub = e.sub.to_uppercase();
        let group = e.group.to_uppercase();
        self.write_1d(
            w,
            &format!("{sub}_TO_{group}"),
            e.embedding.sub_to_group_entries().iter().map(|&i| Some(i)),
        )?;
        self.write_1d(
            w,
            &format!("{group}_TO_{sub}"),
            e.embedding.group_to_sub_entries().iter().copied(),
        )
    }
}

impl TableWriter for RustSourceWriter {
    fn write<W: Write>(&self, mut writer: W, tables: &FlagTables) -> Result<(), FlagError> {
        self.write_tables(&mut writer, tables)
    }

    fn write_suite<W: Write>(&self, mut writer: W, suite: &TableSuite) -> Result<(), FlagError> {
        for (i, tables) in suite.tables.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            self.write_tables(&mut writer, tables)?;
        }
        for e in &suite.embeddings {
            writeln!(writer)?;
            self.write_embedding(&mut writer, e)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::tables::TableOptions;
    use crate::topology::cell_type::SimplexType;

    fn emit(ty: SimplexType, width: IntWidth) -> Result<String, FlagError> {
        let tables = FlagTables::build_standard(ty, &TableOptions::default())?;
        let mut buf = Vec::new();
        RustSourceWriter::new(width).write(&mut buf, &tables)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn triangle_source() {
        let src = emit(SimplexType::Triangle, IntWidth::I8).unwrap();
        assert!(src.contains("pub const TRIANGLE_VALID_FLAGS: [[i8; 2]; 6] = ["));
        assert!(src.contains("pub const TRIANGLE_VALID_TO_RAW: [i8; 6] = [1, 2, 3, 5, 6, 7];"));
        assert!(src.contains(
            "pub const TRIANGLE_RAW_TO_VALID: [i8; 9] = [-1, 0, 1, 2, -1, 3, 4, 5, -1];"
        ));
        assert!(src.contains("TRIANGLE_FACE_CHANGING_ACTION_1: [[i8; 3]; 6]"));
        assert!(src.contains("TRIANGLE_MIRROR"));
    }

    #[test]
    fn tetrahedron_mirror_line() {
        let src = emit(SimplexType::Tetrahedron, IntWidth::I64).unwrap();
        assert!(src.contains(
            "pub const TETRAHEDRON_MIRROR: [i64; 24] = [6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 14, 15, 12, 13, 17, 16, 20, 21, 18, 19, 23, 22];"
        ));
        assert!(src.contains(
            "pub const TETRAHEDRON_PRIMITIVE_ACTIONS: [i64; 5] = [7, 3, 0, 1, 22];"
        ));
    }

    #[test]
    fn narrow_width_overflow_is_reported() {
        // raw indices of the 4-simplex run past 127
        assert!(matches!(
            emit(SimplexType::Simplex(4), IntWidth::I8),
            Err(FlagError::Serialization(_))
        ));
    }

    #[test]
    fn suite_emits_embeddings() {
        let suite = TableSuite::build(
            &[SimplexType::Triangle, SimplexType::Tetrahedron],
            &TableOptions {
                face_changing_dimensions: Some(Vec::new()),
                ..TableOptions::default()
            },
        )
        .unwrap();
        let mut buf = Vec::new();
        RustSourceWriter::default().write_suite(&mut buf, &suite).unwrap();
        let src = String::from_utf8(buf).unwrap();
        assert!(src.contains("pub const TRIANGLE_TO_TETRAHEDRON: [i64; 6]"));
        assert!(src.contains("pub const TETRAHEDRON_TO_TRIANGLE: [i64; 24]"));
    }
}

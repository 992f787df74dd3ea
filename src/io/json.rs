//! JSON complex reader and table writer.
//!
//! A complex is read either as nested label lists,
//! `[[[0],[1],[2]],[[1,2],[0,2],[0,1]]]`, or as `{"standard": n}` for the
//! standard complex of the `n`-simplex.

use std::io::{Read, Write};

use crate::algs::tables::{FlagTables, TableSuite};
use crate::debug_invariants::DebugInvariants;
use crate::flag_error::FlagError;
use crate::io::{ComplexReader, TableWriter};
use crate::topology::complex::{ComplexDescription, ReferenceComplex};

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Description {
    Levels(ComplexDescription),
    Standard { standard: u8 },
}

/// Reads a [`ReferenceComplex`] from JSON and checks simplex sizes.
#[derive(Debug, Default, Clone)]
pub struct JsonComplexReader;

impl JsonComplexReader {
    /// Parse from an in-memory string.
    pub fn read_str(&self, text: &str) -> Result<ReferenceComplex, FlagError> {
        self.read(text.as_bytes())
    }
}

impl ComplexReader for JsonComplexReader {
    fn read<R: Read>(&self, reader: R) -> Result<ReferenceComplex, FlagError> {
        let description: Description = serde_json::from_reader(reader)?;
        let complex = match description {
            Description::Levels(levels) => ReferenceComplex::from(levels),
            Description::Standard { standard } => ReferenceComplex::try_standard(standard)?,
        }
        .validated()?;
        log::debug!(
            "read complex with level sizes {:?}",
            complex.level_sizes()
        );
        Ok(complex)
    }
}

/// Serializes tables with `serde_json`. Absent entries become `null`.
#[derive(Debug, Default, Clone)]
pub struct JsonTableWriter {
    pub pretty: bool,
}

impl JsonTableWriter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn emit<W, T>(&self, mut writer: W, value: &T) -> Result<(), FlagError>
    where
        W: Write,
        T: serde::Serialize,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl TableWriter for JsonTableWriter {
    fn write<W: Write>(&self, writer: W, tables: &FlagTables) -> Result<(), FlagError> {
        self.emit(writer, tables)
    }

    fn write_suite<W: Write>(&self, writer: W, suite: &TableSuite) -> Result<(), FlagError> {
        self.emit(writer, suite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::tables::TableOptions;
    use crate::topology::cell_type::SimplexType;

    #[test]
    fn reads_nested_levels() {
        let tri = JsonComplexReader
            .read_str("[[[0],[1],[2]],[[1,2],[2,0],[0,1]]]")
            .unwrap();
        assert_eq!(tri.level_sizes(), vec![3, 3]);
        assert!(tri.is_complete());
        assert_eq!(tri.simplex(1, 1).unwrap().labels(), &[0, 2]);
    }

    #[test]
    fn reads_standard_shortcut() {
        let tet = JsonComplexReader.read_str(r#"{"standard": 3}"#).unwrap();
        assert_eq!(tet, ReferenceComplex::standard(3));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            JsonComplexReader.read_str("[[[0,1]]]"),
            Err(FlagError::InvalidComplexDescription(_))
        ));
        assert!(matches!(
            JsonComplexReader.read_str("{\"levels\": 3"),
            Err(FlagError::Serialization(_))
        ));
    }

    #[test]
    fn rejects_oversized_spaces() {
        for text in [r#"{"standard": 10}"#, r#"{"standard": 255}"#] {
            assert!(matches!(
                JsonComplexReader.read_str(text),
                Err(FlagError::RawSpaceTooLarge { .. })
            ));
        }
        let json = serde_json::to_string(&ReferenceComplex::standard(10)).unwrap();
        assert!(matches!(
            JsonComplexReader.read_str(&json),
            Err(FlagError::RawSpaceTooLarge { levels: 10, .. })
        ));
    }

    #[test]
    fn tables_round_trip_through_json() {
        let tables =
            FlagTables::build_standard(SimplexType::Triangle, &TableOptions::default()).unwrap();
        let mut buf = Vec::new();
        JsonTableWriter::default().write(&mut buf, &tables).unwrap();
        let back: FlagTables = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, tables);
    }
}

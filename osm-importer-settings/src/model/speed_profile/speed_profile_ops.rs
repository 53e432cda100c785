//! reading and writing of the tab-separated speed profile format (`.spp`).
//!
//! each line holds one road classification with 4 tab-separated fields:
//! name, speed, speed in city, average percentage. there is no header row and
//! no escaping, so field text may not contain tabs or newlines.
use super::{SpeedProfile, SpeedProfileRow, SpeedProfileTable, TableSource};
use crate::model::SettingsError;
use itertools::Itertools;
use std::path::Path;

pub const FIELD_DELIMITER: char = '\t';

/// reads speed profile text into a table. lines that do not have exactly
/// [`SpeedProfileTable::COLUMN_COUNT`] fields are skipped, so a hand-edited file
/// with a few broken lines still loads.
pub fn read_table(text: &str) -> SpeedProfileTable {
    let mut table = SpeedProfileTable::default();
    for (line_number, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields = line.split(FIELD_DELIMITER).collect_vec();
        if fields.len() != table.column_count() {
            log::debug!(
                "skipping speed profile line {} with {} fields",
                line_number + 1,
                fields.len()
            );
            continue;
        }
        table.push_row(fields.as_slice());
    }
    table
}

/// reads a speed profile file into a table. fails only if the file cannot be read.
/// bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_table_file(path: &Path) -> Result<SpeedProfileTable, SettingsError> {
    let bytes = std::fs::read(path).map_err(|source| SettingsError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(&String::from_utf8_lossy(&bytes));
    log::debug!(
        "read speed profile with {} rows from {:?}",
        table.row_count(),
        path
    );
    Ok(table)
}

/// writes the table in speed profile format. rows with any absent cell are left out.
/// cell text is written as-is.
pub fn serialize_table(table: &impl TableSource) -> String {
    let mut out = String::new();
    for row in 0..table.row_count() {
        if let Some(cells) = table.complete_row(row) {
            out.push_str(&cells.iter().join(&FIELD_DELIMITER.to_string()));
            out.push('\n');
        }
    }
    out
}

pub fn write_table_file(path: &Path, table: &impl TableSource) -> Result<(), SettingsError> {
    std::fs::write(path, serialize_table(table)).map_err(|source| SettingsError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote speed profile to {:?}", path);
    Ok(())
}

/// strict conversion of a table into a typed speed profile. unlike [`serialize_table`],
/// an incomplete row fails the whole conversion.
///
/// # Errors
///
/// * [`SettingsError::SchemaMismatch`] if the table does not have 4 columns
/// * [`SettingsError::IncompleteRow`] for the first row with an absent cell
/// * [`SettingsError::InvalidNumber`] for the first numeric cell that is not an unsigned integer
pub fn to_speed_profile(table: &impl TableSource) -> Result<SpeedProfile, SettingsError> {
    let column_count = table.column_count();
    if column_count != SpeedProfileTable::COLUMN_COUNT {
        return Err(SettingsError::SchemaMismatch(column_count));
    }

    // every row must be complete before any number is read
    for row in 0..table.row_count() {
        if let Some(column) = (0..column_count).find(|c| table.cell(row, *c).is_none()) {
            return Err(SettingsError::IncompleteRow { row, column });
        }
    }

    let mut rows = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let text = |column: usize| table.cell(row, column).unwrap_or_default();
        let number = |column: usize| -> Result<u32, SettingsError> {
            let value = text(column);
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| SettingsError::InvalidNumber {
                    row,
                    column,
                    value: String::from(value),
                })
        };
        rows.push(SpeedProfileRow {
            name: String::from(text(0)),
            speed: number(1)?,
            speed_in_city: number(2)?,
            average_percentage: number(3)?,
        });
    }
    Ok(SpeedProfile::new(rows))
}

#[cfg(test)]
mod tests {
    use super::{read_table, read_table_file, serialize_table, to_speed_profile};
    use crate::model::speed_profile::{SpeedProfileRow, SpeedProfileTable, TableSource};
    use crate::model::SettingsError;

    #[test]
    fn test_read_table_skips_wrong_field_count() {
        let table = read_table("motorway\t120\t80\t90\nbadrow\t1\n");
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.complete_row(0),
            Some(vec!["motorway", "120", "80", "90"])
        );
    }

    #[test]
    fn test_read_table_keeps_order_and_text() {
        let text = "primary\t90\t50\t80\ntoo\tmany\tfields\there\tyes\n\nmotorway\t120\t80\t90\n";
        let table = read_table(text);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some("primary"));
        assert_eq!(table.cell(1, 0), Some("motorway"));
        assert_eq!(table.cell(1, 3), Some("90"));
    }

    #[test]
    fn test_read_table_windows_line_endings() {
        let table = read_table("motorway\t120\t80\t90\r\nprimary\t90\t50\t80\r\n");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 3), Some("90"));
    }

    #[test]
    fn test_serialize_skips_incomplete_rows() {
        let mut table = SpeedProfileTable::default();
        table.push_row(&["motorway", "120", "80", "90"]);
        table.push_row(&["primary", "90"]);
        table.push_empty_row();
        table.push_row(&["residential", "30", "30", "60"]);
        assert_eq!(
            serialize_table(&table),
            "motorway\t120\t80\t90\nresidential\t30\t30\t60\n"
        );
    }

    #[test]
    fn test_serialize_keeps_cell_text() {
        let mut table = SpeedProfileTable::default();
        table.push_row(&["track", "007", " 20", "50"]);
        assert_eq!(serialize_table(&table), "track\t007\t 20\t50\n");
    }

    #[test]
    fn test_table_round_trip() {
        let mut table = SpeedProfileTable::default();
        table.push_row(&["motorway", "120", "80", "90"]);
        table.push_row(&["motorway", "100", "70", "85"]);
        table.push_row(&["living street", "10", "x", "60"]);
        let result = read_table(&serialize_table(&table));
        assert_eq!(result, table);
    }

    #[test]
    fn test_to_speed_profile() {
        let table = read_table("motorway\t120\t80\t90\nprimary\t90\t50\t80\n");
        let profile = to_speed_profile(&table).expect("should be valid");
        assert_eq!(
            profile.rows(),
            &[
                SpeedProfileRow::new("motorway", 120, 80, 90),
                SpeedProfileRow::new("primary", 90, 50, 80),
            ]
        );
    }

    #[test]
    fn test_to_speed_profile_wrong_column_count() {
        let mut table = SpeedProfileTable::new(3);
        table.push_row(&["motorway", "120", "80"]);
        match to_speed_profile(&table) {
            Err(SettingsError::SchemaMismatch(3)) => {}
            other => panic!("expected SchemaMismatch, found {other:?}"),
        }
    }

    #[test]
    fn test_to_speed_profile_incomplete_row() {
        let mut table = SpeedProfileTable::default();
        table.push_row(&["motorway", "120", "80", "90"]);
        table.push_row(&["primary", "90", "50"]);
        match to_speed_profile(&table) {
            Err(SettingsError::IncompleteRow { row: 1, column: 3 }) => {}
            other => panic!("expected IncompleteRow, found {other:?}"),
        }
    }

    #[test]
    fn test_to_speed_profile_invalid_number() {
        let mut table = SpeedProfileTable::default();
        table.push_row(&["motorway", "fast", "80", "90"]);
        match to_speed_profile(&table) {
            Err(SettingsError::InvalidNumber { row, column, value }) => {
                assert_eq!((row, column), (0, 1));
                assert_eq!(value, "fast");
            }
            other => panic!("expected InvalidNumber, found {other:?}"),
        }
    }

    #[test]
    fn test_to_speed_profile_negative_number() {
        let mut table = SpeedProfileTable::default();
        table.push_row(&["motorway", "120", "-5", "90"]);
        assert!(matches!(
            to_speed_profile(&table),
            Err(SettingsError::InvalidNumber { column: 2, .. })
        ));
    }

    #[test]
    fn test_read_table_file_with_invalid_utf8() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("latin1.spp");
        std::fs::write(&path, b"motorway\t120\t80\t90\nStra\xDFe\t30\t30\t60\n")
            .expect("write profile");
        let table = read_table_file(&path).expect("should read");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some("motorway"));
        assert_eq!(table.cell(1, 0), Some("Stra\u{FFFD}e"));
        assert_eq!(table.cell(1, 3), Some("60"));
    }
}

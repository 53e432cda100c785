use super::{SpeedProfile, TableSource};

/// in-memory editable speed table. cells hold their text as entered; a cell that was never
/// set is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedProfileTable {
    column_count: usize,
    rows: Vec<Vec<Option<String>>>,
}

impl Default for SpeedProfileTable {
    fn default() -> Self {
        Self::new(SpeedProfileTable::COLUMN_COUNT)
    }
}

impl SpeedProfileTable {
    /// name, speed, speed in city, average percentage
    pub const COLUMN_COUNT: usize = 4;

    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            rows: vec![],
        }
    }

    /// appends a row with every cell absent and returns its index.
    pub fn push_empty_row(&mut self) -> usize {
        self.rows.push(vec![None; self.column_count]);
        self.rows.len() - 1
    }

    /// appends a row from the given cells. extra cells beyond the column count are
    /// dropped, missing ones are left absent.
    pub fn push_row<S: AsRef<str>>(&mut self, cells: &[S]) -> usize {
        let row = (0..self.column_count)
            .map(|column| cells.get(column).map(|c| String::from(c.as_ref())))
            .collect();
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// sets the text of an existing cell. returns false if the cell is out of bounds.
    pub fn set_cell(&mut self, row: usize, column: usize, text: &str) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = Some(String::from(text));
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableSource for SpeedProfileTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }
}

impl From<&SpeedProfile> for SpeedProfileTable {
    fn from(profile: &SpeedProfile) -> Self {
        let mut table = SpeedProfileTable::default();
        for row in profile.rows() {
            table.push_row(&row.cells());
        }
        table
    }
}

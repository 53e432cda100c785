/// read access to a grid of text cells, such as the speed table presented by a host UI.
/// rows and columns are addressed by index. a cell the user never filled in is `None`.
pub trait TableSource {
    fn row_count(&self) -> usize;
    fn column_count(&self) -> usize;
    fn cell(&self, row: usize, column: usize) -> Option<&str>;

    /// all cells of a row, or `None` if any of them is absent.
    fn complete_row(&self, row: usize) -> Option<Vec<&str>> {
        (0..self.column_count())
            .map(|column| self.cell(row, column))
            .collect()
    }
}

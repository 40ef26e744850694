//! Table rendering for the verbose listing.

/// A left-aligned fixed-width table without borders.
///
/// Column widths follow the widest cell in each column; cells are joined by
/// a single space.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.len()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(cell.len());
            }
        }

        self.rows.push(row);
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string, header row first.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.render_row(&self.headers));
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.join("\n")
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .column_widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}")
            })
            .collect();
        cells.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["A", "B"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.render(), "A B");
    }

    #[test]
    fn columns_widen_to_longest_cell() {
        let mut table = Table::new(vec!["Name", "Size"]);
        table.add_row(vec!["a.txt".to_string(), "10".to_string()]);
        table.add_row(vec!["long-name.txt".to_string(), "2048".to_string()]);

        let output = table.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Name          Size");
        assert_eq!(lines[1], "a.txt         10  ");
        assert_eq!(lines[2], "long-name.txt 2048");
    }

    #[test]
    fn header_keeps_its_width_when_data_is_narrow() {
        let mut table = Table::new(vec!["File name", "File size"]);
        table.add_row(vec!["a.txt".to_string(), "10".to_string()]);

        let output = table.render();
        assert!(output.starts_with("File name File size"));
    }
}

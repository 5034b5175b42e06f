//! DrawingML tables.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::text::TextFrame;
use crate::units::{inches, Emu, Rect};
use serde::{Deserialize, Serialize};

/// Inner padding of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMargins {
    pub left: Emu,
    pub right: Emu,
    pub top: Emu,
    pub bottom: Emu,
}

impl Default for CellMargins {
    /// PowerPoint's defaults: 0.1" left/right, 0.05" top/bottom.
    fn default() -> Self {
        Self {
            left: inches(0.1),
            right: inches(0.1),
            top: inches(0.05),
            bottom: inches(0.05),
        }
    }
}

impl CellMargins {
    /// Tighter padding used by the deck tables.
    pub fn compact() -> Self {
        Self {
            left: inches(0.05),
            right: inches(0.05),
            top: inches(0.04),
            bottom: inches(0.04),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: TextFrame,
    pub fill: Option<Rgb>,
    pub margins: CellMargins,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub height: Emu,
    pub cells: Vec<TableCell>,
}

/// A grid of cells. Row 0 is the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Emu>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty `rows` x `cols` table filling `frame`.
    ///
    /// Columns get `width / cols` and rows `height / rows` (integer
    /// division, remainder dropped).
    pub fn new(rows: usize, cols: usize, frame: Rect) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidTable(format!(
                "table needs at least one row and one column, got {}x{}",
                rows, cols
            )));
        }

        let col_width = Emu(frame.width.get() / cols as i64);
        let row_height = Emu(frame.height.get() / rows as i64);

        Ok(Self {
            columns: vec![col_width; cols],
            rows: (0..rows)
                .map(|_| TableRow {
                    height: row_height,
                    cells: vec![TableCell::default(); cols],
                })
                .collect(),
        })
    }

    /// Check that `grid` is non-empty and rectangular, returning its
    /// `(rows, cols)`.
    pub fn grid_dimensions<R, S>(grid: &[R]) -> Result<(usize, usize)>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let cols = grid.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if grid.is_empty() || cols == 0 {
            return Err(Error::InvalidTable("grid is empty".to_string()));
        }

        if let Some((idx, row)) = grid
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != cols)
        {
            return Err(Error::InvalidTable(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.as_ref().len(),
                cols
            )));
        }

        Ok((grid.len(), cols))
    }

    /// Replace the column widths. The list must have one entry per column.
    pub fn set_column_widths(&mut self, widths: &[Emu]) -> Result<()> {
        if widths.len() != self.columns.len() {
            return Err(Error::InvalidTable(format!(
                "{} column widths given for {} columns",
                widths.len(),
                self.columns.len()
            )));
        }
        self.columns.copy_from_slice(widths);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total width of the grid columns.
    pub fn width(&self) -> Emu {
        self.columns.iter().copied().sum()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_split() {
        let table = Table::new(8, 4, Rect::new(Emu(0), Emu(0), Emu(1003), Emu(800))).unwrap();
        assert_eq!(table.row_count(), 8);
        assert_eq!(table.column_count(), 4);
        assert!(table.columns.iter().all(|&w| w == Emu(250)));
        assert!(table.rows.iter().all(|r| r.height == Emu(100)));
        assert_eq!(table.width(), Emu(1000));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            Table::new(0, 3, Rect::default()),
            Err(Error::InvalidTable(_))
        ));
    }

    #[test]
    fn test_grid_dimensions() {
        let grid: &[&[&str]] = &[&["a", "b"], &["c", "d"], &["e", "f"]];
        assert_eq!(Table::grid_dimensions(grid).unwrap(), (3, 2));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let grid = vec![vec!["a", "b"], vec!["c"]];
        let err = Table::grid_dimensions(&grid).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 cells"));

        let empty: Vec<Vec<&str>> = Vec::new();
        assert!(Table::grid_dimensions(&empty).is_err());
    }

    #[test]
    fn test_column_widths_length_checked() {
        let mut table = Table::new(2, 2, Rect::inches(0.0, 0.0, 2.0, 1.0)).unwrap();
        assert!(table.set_column_widths(&[inches(1.0)]).is_err());
        table.set_column_widths(&[inches(0.5), inches(3.0)]).unwrap();
        assert_eq!(table.width(), inches(3.5));
    }

    #[test]
    fn test_cell_access() {
        let mut table = Table::new(2, 3, Rect::inches(0.0, 0.0, 3.0, 1.0)).unwrap();
        table.cell_mut(1, 2).unwrap().fill = Some(Rgb::WHITE);
        assert_eq!(table.cell(1, 2).unwrap().fill, Some(Rgb::WHITE));
        assert!(table.cell(2, 0).is_none());
    }
}

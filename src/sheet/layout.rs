/// Columns wider than this after auto-fit are clamped.
pub const WIDTH_THRESHOLD: f64 = 30.0;
/// Width given to clamped columns.
pub const CLAMPED_WIDTH: f64 = 50.0;
/// Value written into padded cells.
pub const PADDING: &str = " ";

/// A cell value as it will be written to the worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(u64),
    Blank,
}

impl Cell {
    /// Text cell, or [`Cell::Blank`] for an empty string.
    pub fn text(value: &str) -> Self {
        if value.is_empty() {
            Cell::Blank
        } else {
            Cell::Text(value.to_string())
        }
    }

    /// Length of the value as displayed, in characters.
    pub fn rendered_len(&self) -> usize {
        match self {
            Cell::Text(text) => text.chars().count(),
            Cell::Number(n) => n.to_string().len(),
            Cell::Blank => 0,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// Column widths and padded cells for one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Width per column, indexed from column A.
    pub widths: Vec<f64>,
    /// `(row, column)` of blank cells that receive [`PADDING`], zero based.
    pub padded: Vec<(u32, u16)>,
}

impl SheetLayout {
    /// Plans the layout of `grid` (header row included).
    ///
    /// Every column gets `(longest value + 2) * 1.2`. A column whose width ends
    /// up above [`WIDTH_THRESHOLD`] is clamped to [`CLAMPED_WIDTH`] and, when
    /// `pad_after_wide_columns` is set, every blank cell of the column to its
    /// right is padded with a single space. Padding never changes widths.
    pub fn plan(grid: &[Vec<Cell>], pad_after_wide_columns: bool) -> Self {
        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);

        let mut widths: Vec<f64> = (0..columns)
            .map(|col| {
                let longest = grid
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(Cell::rendered_len)
                    .max()
                    .unwrap_or(0);
                autofit_width(longest)
            })
            .collect();

        let mut padded = Vec::new();
        for col in 0..columns {
            if widths[col] <= WIDTH_THRESHOLD {
                continue;
            }
            widths[col] = CLAMPED_WIDTH;

            let neighbour = col + 1;
            if !pad_after_wide_columns || neighbour >= columns {
                continue;
            }

            for (row_idx, row) in grid.iter().enumerate() {
                if row.get(neighbour).is_none_or(Cell::is_blank) {
                    padded.push((row_idx as u32, neighbour as u16));
                }
            }
        }

        Self { widths, padded }
    }
}

/// Approximates Excel's auto-fit for a column whose longest value has
/// `max_len` characters.
pub fn autofit_width(max_len: usize) -> f64 {
    (max_len as f64 + 2.0) * 1.2
}

//! # Spreadsheet Module
//!
//! Writes track rows into a single-sheet Excel workbook.
//!
//! The worksheet layout mimics what a spreadsheet user would do by hand after
//! pasting the data: auto-fit every column, cap columns that would get too
//! wide, keep the header visible while scrolling. Layout decisions are made by
//! [`SheetLayout::plan`] on the in-memory grid before anything touches the
//! disk, then applied in one pass while writing.
//!
//! ## Worksheet Format
//!
//! ```text
//! | Track Number | Track Name | Artist | Album | Duration | Link | Date Added |
//! |            1 | ...        | ...    | ...   |      215 | ...  | 2024-...   |
//! ```
//!
//! Track Number and Duration are numeric cells, everything else is text.

mod layout;

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

pub use layout::{CLAMPED_WIDTH, Cell, PADDING, SheetLayout, WIDTH_THRESHOLD, autofit_width};

use crate::{error::ExportError, types::TrackRow};

/// Name of the only worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Column headers, in column order.
pub const HEADERS: [&str; 7] = [
    "Track Number",
    "Track Name",
    "Artist",
    "Album",
    "Duration",
    "Link",
    "Date Added",
];

/// Lays out rows as worksheet cells, header row first.
pub fn rows_to_grid(rows: &[TrackRow]) -> Vec<Vec<Cell>> {
    let header: Vec<Cell> = HEADERS.iter().map(|h| Cell::text(h)).collect();

    std::iter::once(header)
        .chain(rows.iter().map(|row| {
            vec![
                Cell::Number(row.position as u64),
                Cell::text(&row.title),
                Cell::text(&row.artist),
                Cell::text(&row.album),
                Cell::Number(row.duration),
                Cell::text(&row.link),
                Cell::text(&row.date_added),
            ]
        }))
        .collect()
}

/// Writes `rows` to a new workbook at `path`, replacing any existing file.
///
/// The header row is bold and frozen; column widths and neighbour padding
/// follow [`SheetLayout::plan`]. Returns the applied layout.
///
/// # Errors
///
/// Returns [`ExportError::Spreadsheet`] if a cell cannot be written or the
/// file cannot be saved. Nothing is written to disk before the workbook is
/// complete.
pub fn write_workbook(rows: &[TrackRow], path: &Path) -> Result<SheetLayout, ExportError> {
    let grid = rows_to_grid(rows);
    let layout = SheetLayout::plan(&grid, true);

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row_idx, row) in grid.iter().enumerate() {
        let row_num = row_idx as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            match cell {
                Cell::Text(text) if row_num == 0 => {
                    worksheet.write_string_with_format(row_num, col_num, text, &header_format)?;
                }
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col_num, text)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row_num, col_num, *n as f64)?;
                }
                Cell::Blank => {}
            }
        }
    }

    for &(row_num, col_num) in &layout.padded {
        worksheet.write_string(row_num, col_num, PADDING)?;
    }

    for (col_idx, width) in layout.widths.iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, *width)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(layout)
}

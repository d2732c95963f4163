//! Rectangular edit ranges with 1-based coordinates

use crate::error::{NotifyError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Rows on a sheet (1..=1048576)
pub const MAX_ROWS: u32 = 1_048_576;

/// Columns on a sheet (A..=XFD)
pub const MAX_COLUMNS: u32 = 16_384;

/// A contiguous block of cells: origin plus row/column counts.
///
/// Rows and columns are 1-based, matching what spreadsheet hosts report for
/// an edit. A range with zero rows or zero columns is valid and empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditRange {
    row: u32,
    col: u32,
    num_rows: u32,
    num_columns: u32,
}

impl EditRange {
    pub fn new(row: u32, col: u32, num_rows: u32, num_columns: u32) -> Result<Self> {
        if row == 0 || col == 0 {
            return Err(NotifyError::InvalidRange(format!(
                "origin ({}, {}) must be 1-based",
                row, col
            )));
        }
        // Last row/column must fit on a sheet (XFD1048576)
        let last_row = row as u64 + (num_rows as u64).saturating_sub(1);
        let last_col = col as u64 + (num_columns as u64).saturating_sub(1);
        if last_row > MAX_ROWS as u64 || last_col > MAX_COLUMNS as u64 {
            return Err(NotifyError::InvalidRange(format!(
                "{} x {} cells from ({}, {}) exceeds the sheet limit of {} rows and {} columns",
                num_rows, num_columns, row, col, MAX_ROWS, MAX_COLUMNS
            )));
        }
        Ok(Self {
            row,
            col,
            num_rows,
            num_columns,
        })
    }

    /// A single-cell range
    pub fn single(row: u32, col: u32) -> Result<Self> {
        Self::new(row, col, 1, 1)
    }

    /// Parse A1 notation: `B2` or `B2:C3`. Absolute markers (`$B$2`) are
    /// accepted and ignored. Corners may be given in any order.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let (first, second) = match text.split_once(':') {
            Some((a, b)) => (a, Some(b)),
            None => (text, None),
        };

        let invalid = || NotifyError::InvalidRange(text.to_string());
        let (r1, c1) = parse_cell(first).ok_or_else(invalid)?;
        let (r2, c2) = match second {
            Some(cell) => parse_cell(cell).ok_or_else(invalid)?,
            None => (r1, c1),
        };

        let (top, bottom) = (r1.min(r2), r1.max(r2));
        let (left, right) = (c1.min(c2), c1.max(c2));
        Self::new(top, left, bottom - top + 1, right - left + 1)
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.col
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn num_columns(&self) -> u32 {
        self.num_columns
    }

    /// Number of cells covered
    pub fn len(&self) -> usize {
        self.num_rows as usize * self.num_columns as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.row
            && col >= self.col
            && (row - self.row) < self.num_rows
            && (col - self.col) < self.num_columns
    }

    /// Cell coordinates in row-major order: the column advances fastest.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.num_rows).flat_map(move |i| {
            (0..self.num_columns).map(move |j| (self.row + i, self.col + j))
        })
    }
}

impl fmt::Display for EditRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = format!("{}{}", column_to_letters(self.col), self.row);
        if self.is_empty() {
            return write!(f, "{} (empty)", origin);
        }
        if self.len() == 1 {
            return write!(f, "{}", origin);
        }
        write!(
            f,
            "{}:{}{}",
            origin,
            column_to_letters(self.col + self.num_columns - 1),
            self.row + self.num_rows - 1
        )
    }
}

/// Parse one A1 cell into 1-based (row, col)
fn parse_cell(text: &str) -> Option<(u32, u32)> {
    static CELL_PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = CELL_PATTERN
        .get_or_init(|| Regex::new(r"^\$?([A-Za-z]{1,3})\$?([0-9]{1,10})$").unwrap());

    let caps = re.captures(text.trim())?;
    let col = letters_to_column(&caps[1]);
    let row: u32 = caps[2].parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row, col))
}

/// Convert column letters to a 1-based number (A -> 1, Z -> 26, AA -> 27)
fn letters_to_column(letters: &str) -> u32 {
    letters
        .bytes()
        .map(|b| (b.to_ascii_uppercase() - b'A' + 1) as u32)
        .fold(0, |acc, digit| acc * 26 + digit)
}

/// Convert a 1-based column number to letters (1 -> A, 27 -> AA)
pub fn column_to_letters(mut col: u32) -> String {
    let mut result = String::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        result.insert(0, (b'A' + rem as u8) as char);
        col = (col - 1) / 26;
    }
    result
}

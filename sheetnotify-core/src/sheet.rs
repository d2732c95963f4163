//! Read access to a sheet's current cell values

use crate::value::CellValue;
use std::collections::HashMap;

/// Capability a spreadsheet host exposes to the notifier: the sheet's name
/// and the current value at any 1-based (row, col).
pub trait SheetSource {
    fn name(&self) -> &str;

    /// Cells with no content read as [`CellValue::Empty`]
    fn value_at(&self, row: u32, col: u32) -> CellValue;
}

/// Sparse in-memory sheet
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    pub name: String,
    pub cells: HashMap<(u32, u32), CellValue>,
}

impl MemorySheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
        }
    }

    pub fn set(&mut self, row: u32, col: u32, value: impl Into<CellValue>) {
        self.cells.insert((row, col), value.into());
    }

    pub fn with_cell(mut self, row: u32, col: u32, value: impl Into<CellValue>) -> Self {
        self.set(row, col, value);
        self
    }

    /// Fill a block of rows starting at (row, col).
    ///
    /// Values that would land past `u32::MAX` in either direction are dropped.
    pub fn with_rows<V, R>(mut self, row: u32, col: u32, rows: R) -> Self
    where
        V: Into<CellValue>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
    {
        for (i, values) in rows.into_iter().enumerate() {
            let Some(r) = offset(row, i) else { break };
            for (j, value) in values.into_iter().enumerate() {
                let Some(c) = offset(col, j) else { break };
                self.set(r, c, value);
            }
        }
        self
    }
}

fn offset(base: u32, index: usize) -> Option<u32> {
    u32::try_from(index).ok().and_then(|i| base.checked_add(i))
}

impl SheetSource for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_at(&self, row: u32, col: u32) -> CellValue {
        self.cells.get(&(row, col)).cloned().unwrap_or_default()
    }
}

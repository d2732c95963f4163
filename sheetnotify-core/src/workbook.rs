//! Sheet source backed by an Excel/ODS file

use crate::error::{NotifyError, Result};
use crate::sheet::SheetSource;
use crate::value::CellValue;
use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use std::path::Path;

/// One worksheet loaded from a workbook file (xlsx, xlsm, xls, xlsb, ods)
pub struct WorkbookSheet {
    name: String,
    cells: Range<Data>,
}

impl WorkbookSheet {
    /// Load `sheet` from the file, or the first sheet when `None`
    pub fn open<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            NotifyError::Workbook(format!("failed to open {}: {}", path.display(), e))
        })?;

        let sheet_names = workbook.sheet_names();
        let name = match sheet {
            Some(name) if sheet_names.iter().any(|n| n == name) => name.to_string(),
            Some(name) => {
                return Err(NotifyError::Workbook(format!(
                    "sheet '{}' not found in {} (available: {})",
                    name,
                    path.display(),
                    sheet_names.join(", ")
                )));
            }
            None => sheet_names.first().cloned().ok_or_else(|| {
                NotifyError::Workbook(format!("{} has no sheets", path.display()))
            })?,
        };

        let cells = workbook.worksheet_range(&name).map_err(|e| {
            NotifyError::Workbook(format!("failed to read sheet '{}': {}", name, e))
        })?;

        Ok(Self { name, cells })
    }
}

impl SheetSource for WorkbookSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_at(&self, row: u32, col: u32) -> CellValue {
        if row == 0 || col == 0 {
            return CellValue::Empty;
        }
        self.cells
            .get_value((row - 1, col - 1))
            .map(to_cell_value)
            .unwrap_or_default()
    }
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(data.to_string())),
        Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

//! Update payload posted for each edit

use crate::error::Result;
use crate::event::EditEvent;
use crate::value::CellValue;
use serde::Serialize;

/// One edited cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellUpdate {
    pub row: u32,
    pub col: u32,
    pub value: CellValue,
}

/// JSON body of a notification: `{"sheetName": ..., "updates": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayload {
    pub sheet_name: String,
    pub updates: Vec<CellUpdate>,
}

impl UpdatePayload {
    /// Read every cell of the edited range, row by row.
    ///
    /// Always yields `num_rows * num_columns` updates; a zero-size range
    /// gives an empty list.
    pub fn from_event(event: &EditEvent<'_>) -> Self {
        let updates = event
            .range
            .cells()
            .map(|(row, col)| CellUpdate {
                row,
                col,
                value: event.source.value_at(row, col),
            })
            .collect();

        Self {
            sheet_name: event.sheet_name().to_string(),
            updates,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

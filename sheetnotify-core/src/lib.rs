//! sheetnotify-core: forward spreadsheet cell edits as JSON update payloads
//!
//! An edit event names a sheet and a rectangular range. The notifier flattens
//! the range into per-cell updates in row-major order and posts them to an
//! HTTP endpoint, once per event, without retrying.

pub mod config;
pub mod error;
pub mod event;
pub mod notifier;
pub mod payload;
pub mod range;
pub mod sheet;
pub mod transport;
pub mod value;
#[cfg(feature = "workbook")]
pub mod workbook;

pub use config::{DEFAULT_ENDPOINT, NotifierConfig, SheetConfig};
pub use error::{NotifyError, Result};
pub use event::EditEvent;
pub use notifier::{Delivery, EditNotifier};
pub use payload::{CellUpdate, UpdatePayload};
pub use range::EditRange;
pub use reqwest::Url;
pub use sheet::{MemorySheet, SheetSource};
pub use transport::{HttpTransport, Transport};
pub use value::CellValue;
#[cfg(feature = "workbook")]
pub use workbook::WorkbookSheet;

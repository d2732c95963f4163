//! Edit notifications delivered by the spreadsheet host

use crate::range::EditRange;
use crate::sheet::SheetSource;
use std::fmt;

/// One edit: the sheet it happened on and the range that changed.
///
/// The event borrows the sheet; values are read when the payload is built,
/// so they reflect the sheet at notification time.
#[derive(Clone, Copy)]
pub struct EditEvent<'a> {
    pub source: &'a dyn SheetSource,
    pub range: EditRange,
}

impl<'a> EditEvent<'a> {
    pub fn new(source: &'a dyn SheetSource, range: EditRange) -> Self {
        Self { source, range }
    }

    pub fn sheet_name(&self) -> &str {
        self.source.name()
    }
}

impl fmt::Debug for EditEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditEvent")
            .field("sheet", &self.sheet_name())
            .field("range", &self.range)
            .finish()
    }
}

use crate::domain::Record;
use crate::dto::{Extraction, InvalidEntry, ValidEntry};

/// Hooks invoked while the extractor walks a collection. Every method is a
/// no-op by default.
pub trait ExtractObserver {
    fn on_record(&mut self, _index: usize, _record: &Record) {}
    fn on_valid(&mut self, _entry: &ValidEntry) {}
    fn on_invalid(&mut self, _entry: &InvalidEntry) {}
    fn on_finish(&mut self, _extraction: &Extraction) {}
}

impl ExtractObserver for () {}


use mobscan_core::domain::Record;
use mobscan_core::dto::{Extraction, InvalidEntry, ValidEntry};
use mobscan_core::rules::ExtractObserver;
use tracing::debug;

/// Narrates an extraction run at debug level.
#[derive(Debug, Default)]
pub struct TracingProgress {
    records: usize,
    with_phone: usize,
}

impl ExtractObserver for TracingProgress {
    fn on_record(&mut self, index: usize, record: &Record) {
        self.records += 1;
        let Some(phone) = record.phone_raw.as_deref() else {
            return;
        };
        self.with_phone += 1;
        debug!(index, name = record.name_or_default(), phone, "checking record");
    }

    fn on_valid(&mut self, entry: &ValidEntry) {
        debug!(name = %entry.name, phone = %entry.phone, "valid number");
    }

    fn on_invalid(&mut self, entry: &InvalidEntry) {
        debug!(name = %entry.name, phone = %entry.phone, "invalid number");
    }

    fn on_finish(&mut self, extraction: &Extraction) {
        debug!(
            records = self.records,
            with_phone = self.with_phone,
            valid = extraction.valid.len(),
            invalid = extraction.invalid.len(),
            "extraction finished"
        );
    }
}

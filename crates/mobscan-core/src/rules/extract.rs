use crate::domain::{is_valid_mobile, Record, MOBILE_NUMBER_LEN};
use crate::dto::{Extraction, InvalidEntry, InvalidReason, ValidEntry, ValidationResult};
use crate::rules::observer::ExtractObserver;

pub fn extract(records: &[Record]) -> Extraction {
    extract_with(records, &mut ())
}

pub fn extract_with<O>(records: &[Record], observer: &mut O) -> Extraction
where
    O: ExtractObserver + ?Sized,
{
    let mut extraction = Extraction::default();

    for (index, record) in records.iter().enumerate() {
        observer.on_record(index, record);
        let Some(raw) = record.phone_raw.as_deref() else {
            continue;
        };

        for run in digit_runs(raw) {
            let result = validate_run(record, run);
            match &result {
                ValidationResult::Valid(entry) => observer.on_valid(entry),
                ValidationResult::Invalid(entry) => observer.on_invalid(entry),
            }
            extraction.push(result);
        }
    }

    observer.on_finish(&extraction);
    extraction
}

fn validate_run(record: &Record, phone: String) -> ValidationResult {
    let name = record.name_or_default().to_string();
    if is_valid_mobile(&phone) {
        ValidationResult::Valid(ValidEntry {
            name,
            phone,
            id: record.id_or_default().to_string(),
        })
    } else {
        ValidationResult::Invalid(InvalidEntry {
            name,
            phone,
            reason: InvalidReason::Invalid,
        })
    }
}

/// Splits a phone field into 11-digit windows, left to right.
///
/// The field is cut into segments at every character that is neither a digit
/// nor grouping punctuation (`-`, `.`, `(`, `)`). Within a segment the digit
/// stretches between punctuation are scanned first; only when none of them
/// holds a full window is the punctuation dropped and the joined digits
/// scanned instead. Each stretch yields `len / 11` non-overlapping windows
/// and leftover digits are dropped.
pub fn digit_runs(raw: &str) -> Vec<String> {
    let mut runs = Vec::new();

    for segment in raw.split(|ch: char| !ch.is_ascii_digit() && !is_grouping(ch)) {
        let found_before = runs.len();
        for stretch in segment.split(is_grouping) {
            push_windows(stretch, &mut runs);
        }
        if runs.len() == found_before {
            let joined: String = segment.chars().filter(char::is_ascii_digit).collect();
            push_windows(&joined, &mut runs);
        }
    }

    runs
}

fn is_grouping(ch: char) -> bool {
    matches!(ch, '-' | '.' | '(' | ')')
}

fn push_windows(stretch: &str, runs: &mut Vec<String>) {
    let mut rest = stretch;
    while rest.len() >= MOBILE_NUMBER_LEN {
        let (window, tail) = rest.split_at(MOBILE_NUMBER_LEN);
        runs.push(window.to_string());
        rest = tail;
    }
}

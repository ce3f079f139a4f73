use crate::error::{IoError, Result};
use mobscan_core::dto::ValidEntry;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const RULE_WIDTH: usize = 40;

/// Numbered report: title, rule, one `{index}. {name} - {phone}` line per
/// entry and a closing total.
pub fn render_report(title: &str, entries: &[ValidEntry]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for (index, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}. {} - {}", index + 1, entry.name, entry.phone);
    }

    let _ = writeln!(out, "\nTotal valid numbers: {}", entries.len());
    out
}

pub fn render_number_list(entries: &[ValidEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.phone);
        out.push('\n');
    }
    out
}

pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let to_error = |source: std::io::Error| IoError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
    }
    fs::write(path, contents).map_err(to_error)
}

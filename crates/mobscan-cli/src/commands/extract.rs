use crate::commands::{print_json, Context};
use crate::progress::TracingProgress;
use anyhow::{Context as _, Result};
use clap::Args;
use mobscan_core::dto::{Extraction, InvalidEntry, ValidEntry};
use mobscan_core::rules::extract_with;
use mobscan_io::companies::ParsedCollection;
use mobscan_io::report::{render_number_list, render_report, write_output};
use mobscan_io::source::{FileSource, RecordSource};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// JSON collection to scan; defaults to input.path from the config
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub report: Option<PathBuf>,
    #[arg(long)]
    pub list: Option<PathBuf>,
    /// Print results without writing the report and list files
    #[arg(long)]
    pub no_write: bool,
    /// Fail on a missing or malformed input instead of treating it as empty
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct ExtractReport<'a> {
    source: String,
    records: usize,
    skipped: usize,
    warnings: &'a [String],
    valid: &'a [ValidEntry],
    invalid: &'a [InvalidEntry],
    report_path: Option<String>,
    list_path: Option<String>,
}

struct OutputPaths {
    report: PathBuf,
    list: PathBuf,
}

pub fn extract(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    let input = args.input.unwrap_or_else(|| ctx.config.input.path.clone());
    let source = FileSource::new(input, ctx.config.input.layout.clone());
    let parsed = load_collection(&source, args.strict)?;
    for warning in &parsed.warnings {
        warn!(source = %source.source_name(), "{warning}");
    }

    let mut progress = TracingProgress::default();
    let extraction = extract_with(&parsed.records, &mut progress);

    let outputs = if args.no_write || extraction.valid.is_empty() {
        None
    } else {
        Some(OutputPaths {
            report: args.report.unwrap_or_else(|| ctx.config.output.report_path.clone()),
            list: args.list.unwrap_or_else(|| ctx.config.output.list_path.clone()),
        })
    };

    if ctx.json {
        print_json(&ExtractReport {
            source: source.source_name(),
            records: parsed.records.len(),
            skipped: parsed.skipped,
            warnings: &parsed.warnings,
            valid: &extraction.valid,
            invalid: &extraction.invalid,
            report_path: outputs.as_ref().map(|o| o.report.display().to_string()),
            list_path: outputs.as_ref().map(|o| o.list.display().to_string()),
        })?;
    } else {
        print_extraction(&extraction);
    }

    if let Some(outputs) = outputs {
        write_outputs(ctx, &extraction, &outputs)?;
    }
    Ok(())
}

fn load_collection(source: &FileSource, strict: bool) -> Result<ParsedCollection> {
    match source.load() {
        Ok(parsed) => Ok(parsed),
        Err(err) if err.is_input_error() && !strict => {
            warn!("{err}; continuing with an empty collection");
            Ok(ParsedCollection::default())
        }
        Err(err) => Err(err).with_context(|| format!("load input {}", source.source_name())),
    }
}

fn print_extraction(extraction: &Extraction) {
    if extraction.valid.is_empty() {
        println!("No valid numbers found.");
    } else {
        println!("Found {} valid numbers:", extraction.valid.len());
        println!();
        for (index, entry) in extraction.valid.iter().enumerate() {
            println!("{}. {} - {}", index + 1, entry.name, entry.phone);
        }
    }

    if !extraction.invalid.is_empty() {
        println!();
        println!("Invalid numbers:");
        for entry in &extraction.invalid {
            println!("  - {}: {}", entry.name, entry.phone);
        }
    }
}

fn write_outputs(ctx: &Context<'_>, extraction: &Extraction, outputs: &OutputPaths) -> Result<()> {
    let report = render_report(&ctx.config.output.report_title, &extraction.valid);
    write_file(ctx, &outputs.report, &report, "Report")?;
    let list = render_number_list(&extraction.valid);
    write_file(ctx, &outputs.list, &list, "Numbers")
}

fn write_file(ctx: &Context<'_>, path: &Path, contents: &str, label: &str) -> Result<()> {
    write_output(path, contents).with_context(|| format!("write {}", path.display()))?;
    if !ctx.json {
        println!("{} written to {}", label, path.display());
    }
    Ok(())
}

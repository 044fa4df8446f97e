// crates/generate_docs/src/lib.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use find_example_sources::{find_example_sources, ExampleFile};
use genexample_marker::GENEXAMPLE_MARKER;

pub mod cli;
pub mod config;
pub mod processor;

use config::GeneratorConfig;
use processor::ExampleProcessor;

/// What happened to a single example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// The page was written next to the source.
    Written,
    /// The page went to stdout (dry run).
    Printed,
    /// The existing page is newer than its inputs.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedExample {
    pub source_path: PathBuf,
    pub error: String,
}

/// Outcome of a whole run, one entry per discovered example.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub printed: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub failed: Vec<FailedExample>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.printed.len() + self.unchanged.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts every marked example under `config.examples_dir`.
///
/// Each file is handled independently: a failure is logged and recorded in
/// the report, and the run moves on to the next file. Only a failure to search
/// the directory itself is returned as an error.
pub fn generate_docs(
    config: &GeneratorConfig,
    processor: &dyn ExampleProcessor,
) -> Result<GenerationReport> {
    let examples = find_example_sources(&config.examples_dir, &config.discovery).with_context(
        || {
            format!(
                "Failed to search {} for examples",
                config.examples_dir.display()
            )
        },
    )?;

    if examples.is_empty() {
        log::warn!(
            "No .{} files starting with {} in {}",
            config.discovery.source_extension,
            GENEXAMPLE_MARKER,
            config.examples_dir.display()
        );
    }

    let mut report = GenerationReport::default();
    for example in &examples {
        match convert_example(processor, example, config) {
            Ok(Conversion::Written) => {
                println!("{}", example.source_path.display());
                report.written.push(example.output_path.clone());
            }
            Ok(Conversion::Printed) => report.printed.push(example.source_path.clone()),
            Ok(Conversion::Unchanged) => {
                log::info!("Up to date: {}", example.output_path.display());
                report.unchanged.push(example.output_path.clone());
            }
            Err(err) => {
                log::error!("{:#}", err);
                report.failed.push(FailedExample {
                    source_path: example.source_path.clone(),
                    error: format!("{:#}", err),
                });
            }
        }
    }

    Ok(report)
}

/// Renders one example and writes (or prints) its page.
pub fn convert_example(
    processor: &dyn ExampleProcessor,
    example: &ExampleFile,
    config: &GeneratorConfig,
) -> Result<Conversion> {
    if config.skip_unchanged && !config.dry_run && is_up_to_date(example) {
        return Ok(Conversion::Unchanged);
    }

    let markdown = processor
        .process_example(example)
        .with_context(|| format!("Failed to convert {}", example.source_path.display()))?;

    if config.dry_run {
        print!("{}", markdown);
        return Ok(Conversion::Printed);
    }

    fs::write(&example.output_path, markdown)
        .with_context(|| format!("Error writing {}", example.output_path.display()))?;
    log::debug!(
        "Wrote {} from {}",
        example.output_path.display(),
        example.source_path.display()
    );
    Ok(Conversion::Written)
}

/// `true` if the page exists and is at least as new as the source and the
/// screenshot. Any metadata error counts as stale.
pub fn is_up_to_date(example: &ExampleFile) -> bool {
    let Some(page_time) = modified(&example.output_path) else {
        return false;
    };
    let inputs = std::iter::once(example.source_path.as_path()).chain(example.image_path.as_deref());
    for input in inputs {
        match modified(input) {
            Some(input_time) if input_time <= page_time => {}
            _ => return false,
        }
    }
    true
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

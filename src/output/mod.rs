//! Output formatting and display for pdfpick.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Validation and load summaries
//! - Per-file operation results and warnings
//! - Quiet and verbose modes

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use std::path::Path;

use crate::config::SelectionMode;
use crate::io::LoadStatistics;
use crate::select::{SelectOutcome, SelectionReport};
use crate::validation::ValidationSummary;

/// Display validation summary to the user.
pub fn display_validation_summary(formatter: &OutputFormatter, summary: &ValidationSummary) {
    if summary.files_failed > 0 {
        formatter.warning(&format!(
            "Warning: {} file(s) failed validation",
            summary.files_failed
        ));
    }

    formatter.info(&format!(
        "Validated {} file(s): {} pages, {}",
        summary.files_validated,
        summary.total_pages,
        summary.format_total_size()
    ));

    if formatter.is_verbose() {
        for result in &summary.results {
            let version = match result.version {
                Some((major, minor)) => format!("PDF {major}.{minor}"),
                None => "PDF".to_string(),
            };
            formatter.detail(
                &result.path.display().to_string(),
                &format!(
                    "{}, {} page(s), {} object(s)",
                    version, result.page_count, result.object_count
                ),
            );
        }
    }
}

/// Display load statistics to the user.
pub fn display_load_statistics(formatter: &OutputFormatter, stats: &LoadStatistics) {
    if stats.failure_count > 0 {
        formatter.warning(&format!(
            "Warning: {} file(s) failed to load",
            stats.failure_count
        ));
    }

    formatter.info(&format!(
        "Loaded {} file(s) in {:.2}s: {} pages, {}",
        stats.success_count,
        stats.total_time.as_secs_f64(),
        stats.total_pages,
        stats.format_total_size()
    ));
}

/// Display the result of one file's selection, including any metadata
/// warnings carried back from the library.
pub fn display_outcome(
    formatter: &OutputFormatter,
    outcome: &SelectOutcome,
    mode: SelectionMode,
    output_path: &Path,
) {
    for warning in &outcome.warnings {
        formatter.warning(&format!("{}: {}", outcome.source.display(), warning));
    }

    formatter.info(&format!(
        "{}: {} {}",
        output_path.display(),
        mode.verb_past(),
        outcome.stats
    ));
}

/// Display the run-level summary of a selection report.
pub fn display_report_summary(
    formatter: &OutputFormatter,
    report: &SelectionReport,
    mode: SelectionMode,
) {
    for skipped in &report.skipped {
        formatter.warning(&format!(
            "Skipped {}: {}",
            skipped.path.display(),
            skipped.error
        ));
    }

    formatter.info(&format!(
        "{} {} page(s) across {} file(s) in {:.2}s",
        match mode {
            SelectionMode::Include => "Extracted",
            SelectionMode::Exclude => "Deleted",
        },
        report.total_affected(),
        report.outcomes.len(),
        report.total_time.as_secs_f64()
    ));
}

//! pdfpick - Extract or delete pages from PDF documents.
//!
//! A CLI tool for building new PDFs from page selections.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use pdfpick::cli::Cli;
use pdfpick::config::{Config, OverwriteMode, SelectionMode};
use pdfpick::error::PdfPickError;
use pdfpick::io::{PdfWriter, format_file_size};
use pdfpick::output::{
    OutputFormatter, display_outcome, display_report_summary, display_validation_summary,
};
use pdfpick::select::{PageStats, Selector};
use pdfpick::validation::{ValidationSummary, Validator};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfPickError> {
    // Expand globs/directories and build the configuration
    let inputs = cli.resolve_inputs()?;
    let config = cli.to_config(inputs)?;
    config.validate()?;

    // Create output formatter
    let formatter = OutputFormatter::from_config(&config);

    // Print header
    if formatter.should_print() {
        formatter.section(&format!("{} v{}", pdfpick::NAME, pdfpick::VERSION));
        formatter.blank_line();
    }

    // Validate configuration and inputs
    formatter.info("Validating input files...");
    let validator = Validator::new();
    let validation_summary = validator.validate_config(&config).await?;

    if formatter.should_print() {
        display_validation_summary(&formatter, &validation_summary);
        formatter.blank_line();
    }

    // Validate output
    validator.validate_output(&config).await?;

    // Handle output file existence
    if !config.dry_run {
        handle_output_overwrite(&config, &formatter).await?;
    }

    // Dry run mode - plan the operation against the validated page counts
    // and stop before anything is written.
    if config.dry_run {
        return dry_run(&config, &validator, &validation_summary, &formatter);
    }

    // Perform the selection
    let action = match config.mode {
        SelectionMode::Include => "Extracting",
        SelectionMode::Exclude => "Deleting",
    };
    formatter.info(&format!("{action} pages {}...", config.selection.expr()));
    formatter.blank_line();

    let selector = Selector::new();
    let report = selector.run(&config).await?;

    // Write the outputs
    let writer = PdfWriter::new();
    let mut json_entries = Vec::new();
    let mut output_size = 0u64;

    for outcome in &report.outcomes {
        let output_path = config.output_path_for(&outcome.source);

        let write_stats = writer.save_with_stats(&outcome.document, &output_path).await?;
        output_size += write_stats.file_size;

        display_outcome(&formatter, outcome, config.mode, &output_path);

        if config.json {
            json_entries.push(json_entry(&outcome.source, &output_path, &outcome.stats));
        }
    }

    if formatter.should_print() {
        formatter.blank_line();
        display_report_summary(&formatter, &report, config.mode);
        formatter.success(&format!(
            "Successfully wrote {} file(s)",
            report.outcomes.len()
        ));

        if formatter.is_verbose() {
            formatter.blank_line();
            formatter.section("Statistics");
            formatter.detail("Input files", &report.outcomes.len().to_string());
            formatter.detail("Pages affected", &report.total_affected().to_string());
            formatter.detail("Input size", &report.format_input_size());
            formatter.detail("Output size", &format_file_size(output_size));
            formatter.detail(
                "Load time",
                &format!("{:.2}s", report.load_time.as_secs_f64()),
            );
            formatter.detail(
                "Total time",
                &format!("{:.2}s", report.total_time.as_secs_f64()),
            );
        }
    }

    if config.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json_entries)
                .map_err(|e| PdfPickError::other(format!("Failed to encode stats: {e}")))?
        );
    }

    Ok(())
}

/// Plan the operation without writing anything.
fn dry_run(
    config: &Config,
    validator: &Validator,
    summary: &ValidationSummary,
    formatter: &OutputFormatter,
) -> Result<(), PdfPickError> {
    let mut json_entries = Vec::new();

    for result in &summary.results {
        let indices = config.selection.resolve(result.page_count)?;
        validator.validate_selection(config.mode, indices.len(), result.page_count)?;

        let stats = PageStats::new(result.page_count, indices.len());
        let output_path = config.output_path_for(&result.path);

        formatter.info(&format!(
            "Would {} {} from {} into {}",
            config.mode.verb(),
            stats,
            result.path.display(),
            output_path.display()
        ));

        if config.json {
            json_entries.push(json_entry(&result.path, &output_path, &stats));
        }
    }

    if config.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json_entries)
                .map_err(|e| PdfPickError::other(format!("Failed to encode stats: {e}")))?
        );
    }

    formatter.blank_line();
    formatter.success("Dry run completed successfully");
    formatter.info("  Run without --dry-run to write the output");

    Ok(())
}

/// One per-file stats record for --json output.
fn json_entry(source: &PathBuf, output: &PathBuf, stats: &PageStats) -> serde_json::Value {
    serde_json::json!({
        "source": source,
        "output": output,
        "stats": stats,
    })
}

/// Handle output file overwrite scenarios.
async fn handle_output_overwrite(
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<(), PdfPickError> {
    let existing: Vec<PathBuf> = config
        .planned_outputs()
        .into_iter()
        .filter(|path| path.exists())
        .collect();

    if existing.is_empty() {
        return Ok(());
    }

    match config.overwrite_mode {
        OverwriteMode::Force => {
            // Just overwrite, no questions asked
            Ok(())
        }
        OverwriteMode::NoClobber => {
            // Error on the first existing file
            Err(PdfPickError::output_exists(existing[0].clone()))
        }
        OverwriteMode::Prompt => {
            // Ask user for confirmation
            if formatter.is_quiet() {
                // In quiet mode, treat as no-clobber
                return Err(PdfPickError::output_exists(existing[0].clone()));
            }

            for path in &existing {
                formatter.warning(&format!("Output file already exists: {}", path.display()));
            }

            // Simple yes/no prompt
            use std::io::{self, Write};
            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .map_err(|err| PdfPickError::other(format!("Failed to read input: {err}")))?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(PdfPickError::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfpick::config::{Metadata, OutputTarget, SelectionMode};
    use pdfpick::range::PageSelection;
    use tempfile::NamedTempFile;

    fn create_test_config() -> Config {
        Config {
            inputs: vec![PathBuf::from("test.pdf")],
            output: OutputTarget::File(PathBuf::from("output.pdf")),
            mode: SelectionMode::Include,
            selection: PageSelection::parse("1").unwrap(),
            dry_run: false,
            verbose: false,
            quiet: false,
            overwrite_mode: OverwriteMode::Force,
            metadata: Metadata::default(),
            continue_on_error: false,
            jobs: None,
            json: false,
        }
    }

    #[tokio::test]
    async fn test_handle_output_overwrite_force() {
        let config = create_test_config();
        let formatter = OutputFormatter::quiet();

        // Should not error with force mode
        let result = handle_output_overwrite(&config, &formatter).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_handle_output_overwrite_no_clobber() {
        let mut config = create_test_config();
        config.overwrite_mode = OverwriteMode::NoClobber;

        // Create a temp file to test against
        let temp_file = NamedTempFile::new().unwrap();
        config.output = OutputTarget::File(temp_file.path().to_path_buf());

        let formatter = OutputFormatter::quiet();

        // Should error with no-clobber when file exists
        let result = handle_output_overwrite(&config, &formatter).await;
        assert!(matches!(result, Err(PdfPickError::OutputExists { .. })));
    }

    #[tokio::test]
    async fn test_handle_output_overwrite_prompt_quiet_refuses() {
        let mut config = create_test_config();
        config.overwrite_mode = OverwriteMode::Prompt;

        let temp_file = NamedTempFile::new().unwrap();
        config.output = OutputTarget::File(temp_file.path().to_path_buf());

        let formatter = OutputFormatter::quiet();

        let result = handle_output_overwrite(&config, &formatter).await;
        assert!(matches!(result, Err(PdfPickError::OutputExists { .. })));
    }

    #[tokio::test]
    async fn test_handle_output_overwrite_nonexistent() {
        let config = create_test_config();
        let formatter = OutputFormatter::quiet();

        // Should not error when file doesn't exist
        let result = handle_output_overwrite(&config, &formatter).await;
        assert!(result.is_ok());
    }
}

//! CLI argument parsing for pdfpick.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpick::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Operating on {} input(s)", cli.args().inputs.len());
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, Metadata, OutputTarget, OverwriteMode, SelectionMode};
use crate::error::{PdfPickError, Result};
use crate::range::PageSelection;
use crate::utils;

/// Extract or delete pages from PDF documents.
///
/// pdfpick builds a new PDF from a page selection: `extract` keeps only
/// the selected pages, `delete` keeps everything else. Pages are given as
/// a range expression such as "1-3,5,7-9".
#[derive(Parser, Debug)]
#[command(name = "pdfpick")]
#[command(version)]
#[command(about = "Extract or delete pages from PDF documents", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// The operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// The two page-selection operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Keep only the selected pages
    ///
    /// Builds a new document containing exactly the pages named by
    /// --pages, in their original document order.
    Extract(OperationArgs),

    /// Remove the selected pages, keeping the rest
    ///
    /// Builds a new document containing every page not named by --pages.
    /// At least one page must remain.
    Delete(OperationArgs),
}

/// Arguments shared by both operations.
#[derive(Args, Debug)]
pub struct OperationArgs {
    /// Input PDF files, glob patterns, or directories
    ///
    /// Directories are searched recursively for .pdf files.
    ///
    /// Examples:
    ///   pdfpick extract report.pdf --pages 1-3 -o summary.pdf
    ///   pdfpick delete 'scans/*.pdf' --pages 1 --out-dir trimmed/
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Pages to operate on, e.g. "1-3,5,7-9"
    ///
    /// Comma-separated page numbers (1-based) and inclusive ranges.
    /// Whitespace is ignored; overlapping ranges are counted once.
    #[arg(short, long, value_name = "RANGE")]
    pub pages: String,

    /// Output PDF file path (single input only)
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Output directory; each result keeps its source file name
    ///
    /// Required when operating on more than one input.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Dry run - validate inputs and preview the operation without
    /// creating output
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show detailed information about each PDF
    #[arg(short, long)]
    pub verbose: bool,

    /// Force overwrite of existing output files without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite existing output files
    ///
    /// If an output file already exists, exit with an error instead of
    /// prompting or overwriting.
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print per-file stats as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Continue with the remaining files when one fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Number of parallel load jobs (default: CPU core count)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Set title metadata on the output PDFs
    ///
    /// If not specified, the title of each source PDF is carried over.
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Set author metadata on the output PDFs
    #[arg(long, value_name = "TEXT")]
    pub author: Option<String>,

    /// Set subject metadata on the output PDFs
    #[arg(long, value_name = "TEXT")]
    pub subject: Option<String>,

    /// Set keywords metadata on the output PDFs (comma-separated)
    #[arg(long, value_name = "TEXT")]
    pub keywords: Option<String>,
}

impl Cli {
    /// The operation arguments, independent of which subcommand ran.
    pub fn args(&self) -> &OperationArgs {
        match &self.command {
            Command::Extract(args) => args,
            Command::Delete(args) => args,
        }
    }

    /// The selection mode for the chosen subcommand.
    pub fn mode(&self) -> SelectionMode {
        match &self.command {
            Command::Extract(_) => SelectionMode::Include,
            Command::Delete(_) => SelectionMode::Exclude,
        }
    }

    /// Expand the input arguments into concrete file paths.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid glob patterns, unreadable directories,
    /// or when nothing at all matches.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>> {
        let inputs = utils::collect_inputs(&self.args().inputs)?;

        if inputs.is_empty() {
            return Err(PdfPickError::NoInputFiles);
        }

        Ok(inputs)
    }

    /// Convert the parsed CLI into an operation configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::InvalidRangeFormat`] for a malformed page
    /// expression and [`PdfPickError::InvalidConfig`] for inconsistent
    /// output arguments.
    pub fn to_config(&self, inputs: Vec<PathBuf>) -> Result<Config> {
        let args = self.args();

        let selection = PageSelection::parse(&args.pages)?;

        let output = match (&args.output, &args.out_dir) {
            (Some(file), None) => OutputTarget::File(file.clone()),
            (None, Some(dir)) => OutputTarget::Directory(dir.clone()),
            (None, None) => {
                if inputs.len() == 1 {
                    return Err(PdfPickError::invalid_config(
                        "No output specified; use -o/--output",
                    ));
                }
                return Err(PdfPickError::invalid_config(
                    "No output specified; use --out-dir for multiple inputs",
                ));
            }
            (Some(_), Some(_)) => {
                // clap's conflicts_with already rejects this; defensive.
                return Err(PdfPickError::invalid_config(
                    "--output and --out-dir are mutually exclusive",
                ));
            }
        };

        let overwrite_mode = if args.force {
            OverwriteMode::Force
        } else if args.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        Ok(Config {
            inputs,
            output,
            mode: self.mode(),
            selection,
            dry_run: args.dry_run,
            verbose: args.verbose,
            quiet: args.quiet,
            overwrite_mode,
            metadata: Metadata::new(
                args.title.clone(),
                args.author.clone(),
                args.subject.clone(),
                args.keywords.clone(),
            ),
            continue_on_error: args.continue_on_error,
            jobs: args.jobs,
            json: args.json,
        })
    }
}

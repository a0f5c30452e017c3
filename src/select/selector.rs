//! The selection orchestrator.
//!
//! [`Selector`] ties the pipeline together: load each input, resolve the
//! page selection against its page count, apply the operation policy,
//! build the output document, and carry metadata over. Each input is a
//! fully independent operation on its own freshly loaded document; there
//! is no state shared between files or between runs.

use lopdf::Document;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{PdfPickError, Result};
use crate::io::{LoadedPdf, PdfReader};
use crate::select::metadata::{MetadataCopier, MetadataWarning};
use crate::select::pages::PageSelector;
use crate::select::stats::PageStats;
use crate::validation::Validator;

/// Result of applying the selection to one input document.
pub struct SelectOutcome {
    /// Path of the source document.
    pub source: PathBuf,

    /// The newly built output document.
    pub document: Document,

    /// Page-count summary of the operation.
    pub stats: PageStats,

    /// Non-fatal metadata problems encountered while copying.
    pub warnings: Vec<MetadataWarning>,

    /// Time taken to resolve, validate and build.
    pub select_time: Duration,
}

/// A file skipped in continue-on-error mode.
pub struct SkippedFile {
    /// Path of the skipped input.
    pub path: PathBuf,

    /// The error that caused the skip.
    pub error: PdfPickError,
}

/// Result of a full selection run over all inputs.
pub struct SelectionReport {
    /// Per-file outcomes, in input order.
    pub outcomes: Vec<SelectOutcome>,

    /// Files skipped under continue-on-error.
    pub skipped: Vec<SkippedFile>,

    /// Time taken to load all inputs.
    pub load_time: Duration,

    /// Total wall time of the run.
    pub total_time: Duration,

    /// Total size of the successfully loaded inputs.
    pub input_size: u64,
}

impl SelectionReport {
    /// Total number of pages affected across all outcomes.
    pub fn total_affected(&self) -> usize {
        self.outcomes.iter().map(|o| o.stats.affected).sum()
    }

    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        crate::io::format_file_size(self.input_size)
    }
}

/// Applies a page selection to one or more documents.
pub struct Selector {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Policy checks for resolved selections.
    validator: Validator,

    /// Builds output documents from page index sets.
    pages: PageSelector,

    /// Carries metadata from source to output.
    metadata: MetadataCopier,
}

impl Selector {
    /// Create a new selector with default settings.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
            validator: Validator::new(),
            pages: PageSelector::new(),
            metadata: MetadataCopier::new(),
        }
    }

    /// Run the configured operation over every input.
    ///
    /// This is the main entry point for selection operations.
    ///
    /// # Errors
    ///
    /// Without `continue_on_error`, the first per-file failure aborts the
    /// run. With it, failed files are collected in
    /// [`SelectionReport::skipped`] and the rest proceed; the run only
    /// fails outright if no file survives.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfpick::select::Selector;
    /// # use pdfpick::config::Config;
    /// # async fn example(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    /// let selector = Selector::new();
    /// let report = selector.run(&config).await?;
    /// println!("Processed {} file(s)", report.outcomes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(&self, config: &Config) -> Result<SelectionReport> {
        let run_start = Instant::now();

        let load_start = Instant::now();
        let (load_results, _load_stats) = self
            .reader
            .load_all(&config.inputs, config.effective_jobs())
            .await;
        let load_time = load_start.elapsed();

        let mut loaded = Vec::new();
        let mut skipped = Vec::new();
        for (path, result) in config.inputs.iter().zip(load_results) {
            match result {
                Ok(pdf) => loaded.push(pdf),
                Err(error) => {
                    if config.continue_on_error {
                        skipped.push(SkippedFile {
                            path: path.clone(),
                            error,
                        });
                    } else {
                        return Err(error);
                    }
                }
            }
        }

        if loaded.is_empty() {
            return Err(PdfPickError::NoInputFiles);
        }

        let mut outcomes = Vec::with_capacity(loaded.len());
        let mut input_size = 0;
        for pdf in &loaded {
            match self.select_one(pdf, config) {
                Ok(outcome) => {
                    input_size += pdf.file_size;
                    outcomes.push(outcome);
                }
                Err(error) => {
                    if config.continue_on_error {
                        skipped.push(SkippedFile {
                            path: pdf.path.clone(),
                            error,
                        });
                    } else {
                        return Err(error);
                    }
                }
            }
        }

        if outcomes.is_empty() {
            return Err(PdfPickError::NoInputFiles);
        }

        Ok(SelectionReport {
            outcomes,
            skipped,
            load_time,
            total_time: run_start.elapsed(),
            input_size,
        })
    }

    /// Apply the configured selection to one loaded document.
    ///
    /// # Errors
    ///
    /// Returns the range, policy or selection error of the first failing
    /// pipeline stage; on failure no partially built document escapes.
    pub fn select_one(&self, pdf: &LoadedPdf, config: &Config) -> Result<SelectOutcome> {
        let start = Instant::now();

        let indices = config.selection.resolve(pdf.page_count)?;
        self.validator
            .validate_selection(config.mode, indices.len(), pdf.page_count)?;

        let mut document = self.pages.build(&pdf.document, &indices, config.mode)?;

        let mut warnings = self.metadata.copy_from(&pdf.document, &mut document);
        warnings.extend(self.metadata.apply_overrides(&mut document, &config.metadata));

        // Stats always derive from the resolved, deduplicated index set,
        // never from re-parsing the expression.
        let stats = PageStats::new(pdf.page_count, indices.len());

        Ok(SelectOutcome {
            source: pdf.path.clone(),
            document,
            stats,
            warnings,
            select_time: start.elapsed(),
        })
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

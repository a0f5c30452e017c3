//! Input validation for pdfpick.
//!
//! This module provides validation of PDF files and configuration before
//! an operation runs. It performs:
//! - File existence and accessibility checks
//! - PDF format validation and page count extraction
//! - Output path validation
//! - Selection policy checks (the extraction/deletion invariants)
//!
//! # Examples
//!
//! ```no_run
//! use pdfpick::validation::Validator;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = Validator::new();
//! let result = validator.validate_file(&PathBuf::from("test.pdf")).await?;
//! println!("PDF has {} pages", result.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::task;

use crate::config::{Config, OutputTarget, SelectionMode};
use crate::error::{PdfPickError, Result};

/// Result of validating a single PDF file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path to the validated file.
    pub path: PathBuf,

    /// Number of pages in the PDF.
    pub page_count: usize,

    /// PDF version (major, minor).
    pub version: Option<(u8, u8)>,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// Number of objects in the PDF.
    pub object_count: usize,

    /// Page dimensions (width, height) in points, if available.
    pub page_dimensions: Option<(f32, f32)>,
}

impl ValidationResult {
    /// Create a validation result from a loaded PDF document.
    fn from_document(path: PathBuf, doc: &Document) -> Self {
        let pages = doc.get_pages();
        let page_count = pages.len();

        let version = doc.version.split_once(".").map(|(major, minor)| {
            (
                major.parse::<u8>().unwrap_or_default(),
                minor.parse::<u8>().unwrap_or_default(),
            )
        });

        let object_count = doc.objects.len();

        // Try to get page dimensions from first page
        let page_dimensions = pages.iter().next().and_then(|(_, page_id)| {
            doc.get_object(*page_id).ok().and_then(|page_obj| {
                if let lopdf::Object::Dictionary(page_dict) = page_obj {
                    page_dict.get(b"MediaBox").ok().and_then(|mediabox| {
                        if let lopdf::Object::Array(arr) = mediabox
                            && arr.len() >= 4
                        {
                            let width = arr[2].as_float().ok()?;
                            let height = arr[3].as_float().ok()?;
                            return Some((width, height));
                        }
                        None
                    })
                } else {
                    None
                }
            })
        });

        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            path,
            page_count,
            version,
            file_size,
            object_count,
            page_dimensions,
        }
    }
}

/// Summary of validation results for multiple files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Individual validation results for each file.
    pub results: Vec<ValidationResult>,

    /// Total number of pages across all files.
    pub total_pages: usize,

    /// Total file size in bytes.
    pub total_size: u64,

    /// Number of files that passed validation.
    pub files_validated: usize,

    /// Number of files that failed validation.
    pub files_failed: usize,
}

impl ValidationSummary {
    /// Create a summary from validation results.
    pub fn from_results(results: Vec<ValidationResult>, files_failed: usize) -> Self {
        let total_pages = results.iter().map(|r| r.page_count).sum();
        let total_size = results.iter().map(|r| r.file_size).sum();
        let files_validated = results.len();

        Self {
            results,
            total_pages,
            total_size,
            files_validated,
            files_failed,
        }
    }

    /// Look up the validation result for a path.
    pub fn result_for(&self, path: &Path) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.path == path)
    }

    /// Format the total file size as a human-readable string.
    pub fn format_total_size(&self) -> String {
        crate::io::format_file_size(self.total_size)
    }
}

/// Validator for PDF files, configuration and selections.
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a single PDF file.
    ///
    /// Performs comprehensive validation including file existence and
    /// accessibility, PDF format validation and page count extraction.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File does not exist
    /// - File is not accessible
    /// - Path is not a regular file
    /// - File is not a valid PDF
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PdfPickError::file_not_found(path.to_path_buf()));
            }
            Err(e) => {
                return Err(PdfPickError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        if !metadata.is_file() {
            return Err(PdfPickError::not_a_file(path.to_path_buf()));
        }

        let path_buf = path.to_path_buf();
        let result = task::spawn_blocking(move || {
            let doc = Document::load(&path_buf).map_err(|e| {
                PdfPickError::document_load_failed(path_buf.clone(), e.to_string())
            })?;

            if doc.get_pages().is_empty() {
                return Err(PdfPickError::document_load_failed(
                    path_buf.clone(),
                    "document has no pages",
                ));
            }

            Ok::<_, PdfPickError>(ValidationResult::from_document(path_buf, &doc))
        })
        .await
        .map_err(|e| PdfPickError::other(format!("Validation task failed: {e}")))??;

        Ok(result)
    }

    /// Validate every input in the configuration.
    ///
    /// With `continue_on_error`, files that fail validation are counted in
    /// the summary and skipped; otherwise the first failure aborts.
    ///
    /// # Errors
    ///
    /// Returns the first per-file error, or [`PdfPickError::NoInputFiles`]
    /// if no file passes validation.
    pub async fn validate_config(&self, config: &Config) -> Result<ValidationSummary> {
        let mut results = Vec::with_capacity(config.inputs.len());
        let mut files_failed = 0;

        for input in &config.inputs {
            match self.validate_file(input).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    if config.continue_on_error {
                        files_failed += 1;
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        if results.is_empty() {
            return Err(PdfPickError::NoInputFiles);
        }

        Ok(ValidationSummary::from_results(results, files_failed))
    }

    /// Validate the output target of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::InvalidConfig`] if the output directory (or
    /// the parent directory of an output file) does not exist or is not
    /// writable.
    pub async fn validate_output(&self, config: &Config) -> Result<()> {
        let dir = match &config.output {
            OutputTarget::File(path) => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => return Ok(()), // bare file name, current directory
            },
            OutputTarget::Directory(dir) => dir.clone(),
        };

        let metadata = match tokio::fs::metadata(&dir).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PdfPickError::invalid_config(format!(
                    "Output directory does not exist: {}",
                    dir.display()
                )));
            }
            Err(e) => {
                return Err(PdfPickError::FileNotAccessible {
                    path: dir,
                    source: e,
                });
            }
        };

        if !metadata.is_dir() {
            return Err(PdfPickError::invalid_config(format!(
                "Output directory is not a directory: {}",
                dir.display()
            )));
        }

        if metadata.permissions().readonly() {
            return Err(PdfPickError::invalid_config(format!(
                "Output directory is not writable: {}",
                dir.display()
            )));
        }

        Ok(())
    }

    /// Apply the operation policy to a resolved selection.
    ///
    /// Extraction requires at least one selected page; deletion requires
    /// at least one page left over, so a document can never be reduced to
    /// zero pages.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::EmptySelection`] or
    /// [`PdfPickError::WouldDeleteAllPages`] accordingly.
    pub fn validate_selection(
        &self,
        mode: SelectionMode,
        selected: usize,
        page_count: usize,
    ) -> Result<()> {
        match mode {
            SelectionMode::Include => {
                // The parser already prevents empty selections; this is a
                // defensive invariant for callers bypassing it.
                if selected == 0 {
                    return Err(PdfPickError::EmptySelection);
                }
            }
            SelectionMode::Exclude => {
                if selected >= page_count {
                    return Err(PdfPickError::WouldDeleteAllPages {
                        requested: selected,
                        total_pages: page_count,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

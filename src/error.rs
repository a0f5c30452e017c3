//! Error types for pdfpick.
//!
//! This module defines all error types that can occur during page-selection
//! operations. Errors are designed to be informative and actionable,
//! providing clear context about what went wrong and how to fix it.
//!
//! # Error Categories
//!
//! - **Range Errors**: malformed or out-of-bounds page-range expressions
//! - **Selection Errors**: selections the operation policy rejects
//! - **Document Errors**: files the PDF library cannot parse
//! - **I/O Errors**: file not found, permission denied, write failures

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for pdfpick operations.
pub type Result<T> = std::result::Result<T, PdfPickError>;

/// Main error type for pdfpick operations.
///
/// All errors in pdfpick use this type, which provides detailed context
/// about what went wrong and where.
#[derive(Debug)]
pub enum PdfPickError {
    /// Page-range expression is malformed or names a page outside the
    /// document.
    InvalidRangeFormat {
        /// The full expression as the user supplied it.
        expr: String,
        /// What is wrong with it, naming the offending token or bound.
        reason: String,
    },

    /// Extraction was requested but the selection resolves to no pages.
    EmptySelection,

    /// Deletion was requested that would remove every page.
    ///
    /// A document is never reduced to zero pages by this tool.
    WouldDeleteAllPages {
        /// Number of pages the selection covers.
        requested: usize,
        /// Total pages in the document.
        total_pages: usize,
    },

    /// The PDF library could not parse the source document.
    DocumentLoadFailed {
        /// Path to the document.
        path: PathBuf,
        /// Reason reported by the library, or an encryption hint.
        reason: String,
    },

    /// Building the output document failed after validation passed.
    SelectionFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Input file was not found.
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input file is not accessible (permission denied, etc.).
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input path exists but is not a regular file.
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// No input files were provided or every input failed to load.
    NoInputFiles,

    /// Output file already exists and overwrite is not allowed.
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create output file.
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to output file.
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// User cancelled the operation.
    Cancelled,

    /// Generic I/O error.
    Io {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Generic error with a custom message.
    Other {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for PdfPickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRangeFormat { expr, reason } => {
                write!(f, "Invalid page range '{expr}': {reason}")
            }
            Self::EmptySelection => {
                write!(f, "The selection resolves to no pages")
            }
            Self::WouldDeleteAllPages {
                requested,
                total_pages,
            } => {
                write!(
                    f,
                    "Refusing to delete all {requested} selected page(s) of {total_pages}: \
                     at least one page must remain"
                )
            }
            Self::DocumentLoadFailed { path, reason } => {
                write!(
                    f,
                    "Failed to load PDF: {}\n  Reason: {}",
                    path.display(),
                    reason
                )
            }
            Self::SelectionFailed { reason } => {
                write!(f, "Page selection failed: {reason}")
            }
            Self::FileNotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            Self::FileNotAccessible { path, source } => {
                write!(
                    f,
                    "Cannot access file: {}\n  Reason: {}",
                    path.display(),
                    source
                )
            }
            Self::NotAFile { path } => {
                write!(f, "Not a file: {}", path.display())
            }
            Self::NoInputFiles => {
                write!(f, "No input files to process")
            }
            Self::OutputExists { path } => {
                write!(
                    f,
                    "Output file already exists: {}\n  \
                     Use --force to overwrite or choose a different output path",
                    path.display()
                )
            }
            Self::FailedToCreateOutput { path, source } => {
                write!(
                    f,
                    "Failed to create output file: {}\n  Reason: {}",
                    path.display(),
                    source
                )
            }
            Self::FailedToWrite { path, source } => {
                write!(
                    f,
                    "Failed to write to output file: {}\n  Reason: {}",
                    path.display(),
                    source
                )
            }
            Self::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {message}")
            }
            Self::Cancelled => {
                write!(f, "Operation cancelled by user")
            }
            Self::Io { source } => {
                write!(f, "I/O error: {source}")
            }
            Self::Other { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl std::error::Error for PdfPickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileNotAccessible { source, .. } => Some(source),
            Self::FailedToCreateOutput { source, .. } => Some(source),
            Self::FailedToWrite { source, .. } => Some(source),
            Self::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PdfPickError {
    fn from(err: io::Error) -> Self {
        Self::Io { source: err }
    }
}

impl From<lopdf::Error> for PdfPickError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for PdfPickError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfPickError {
    /// Create an InvalidRangeFormat error.
    pub fn invalid_range(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRangeFormat {
            expr: expr.into(),
            reason: reason.into(),
        }
    }

    /// Create a DocumentLoadFailed error.
    pub fn document_load_failed(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::DocumentLoadFailed {
            path,
            reason: reason.into(),
        }
    }

    /// Create a SelectionFailed error.
    pub fn selection_failed(reason: impl Into<String>) -> Self {
        Self::SelectionFailed {
            reason: reason.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (batch processing can continue).
    ///
    /// Returns true for per-file errors that might be acceptable in
    /// continue-on-error mode.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidRangeFormat { .. }
                | Self::EmptySelection
                | Self::WouldDeleteAllPages { .. }
                | Self::DocumentLoadFailed { .. }
                | Self::SelectionFailed { .. }
        )
    }

    /// Check if this error should stop all processing immediately.
    ///
    /// Returns true for fatal errors that should always terminate.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoInputFiles
                | Self::FailedToCreateOutput { .. }
                | Self::FailedToWrite { .. }
                | Self::Cancelled
        )
    }

    /// Get the exit code for this error.
    ///
    /// Returns the appropriate process exit code based on error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRangeFormat { .. } => 1,
            Self::EmptySelection => 1,
            Self::WouldDeleteAllPages { .. } => 1,
            Self::DocumentLoadFailed { .. } => 3,
            Self::SelectionFailed { .. } => 6,
            Self::FileNotFound { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::NoInputFiles => 1,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::InvalidConfig { .. } => 1,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }
}

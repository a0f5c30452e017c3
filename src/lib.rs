//! pdfpick - Extract or delete pages from PDF documents.
//!
//! This library builds a new PDF from a page selection over an existing
//! one. It supports:
//!
//! - Page-range expressions like `"1-3,5,7-9"`
//! - Extraction (keep only the selected pages) and deletion (keep the
//!   rest), always preserving original page order
//! - Best-effort metadata carry-over with per-field warnings
//! - Batch operation over many files with parallel loading
//! - Comprehensive error handling
//!
//! # Examples
//!
//! ## Extracting pages
//!
//! ```no_run
//! use pdfpick::config::{Config, Metadata, OutputTarget, OverwriteMode, SelectionMode};
//! use pdfpick::range::PageSelection;
//! use pdfpick::select::Selector;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("report.pdf")],
//!     output: OutputTarget::File(PathBuf::from("summary.pdf")),
//!     mode: SelectionMode::Include,
//!     selection: PageSelection::parse("1-3,5")?,
//!     dry_run: false,
//!     verbose: false,
//!     quiet: false,
//!     overwrite_mode: OverwriteMode::Force,
//!     metadata: Metadata::default(),
//!     continue_on_error: false,
//!     jobs: None,
//!     json: false,
//! };
//!
//! let selector = Selector::new();
//! let report = selector.run(&config).await?;
//! println!("{}", report.outcomes[0].stats);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfpick::io::{PdfReader, PdfWriter};
//! use pdfpick::range::PageSelection;
//! use pdfpick::validation::Validator;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Validate input
//! let validator = Validator::new();
//! let result = validator.validate_file(&PathBuf::from("input.pdf")).await?;
//! println!("PDF has {} pages", result.page_count);
//!
//! // Resolve a selection against the document
//! let indices = PageSelection::parse("2-4")?.resolve(result.page_count)?;
//! assert_eq!(indices, vec![1, 2, 3]);
//!
//! // Load and save PDFs
//! let reader = PdfReader::new();
//! let loaded = reader.load(&PathBuf::from("input.pdf")).await?;
//!
//! let writer = PdfWriter::new();
//! writer.save(&loaded.document, &PathBuf::from("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod range;
pub mod select;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, SelectionMode};
pub use error::{PdfPickError, Result};
pub use range::PageSelection;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

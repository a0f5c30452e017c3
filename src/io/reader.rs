//! PDF reading and loading operations.
//!
//! This module provides efficient PDF loading with support for:
//! - Sequential and parallel loading
//! - Detailed load statistics
//! - Per-file error recovery
//!
//! # Examples
//!
//! ```no_run
//! use pdfpick::io::reader::PdfReader;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let paths = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let (results, stats) = reader.load_all(&paths, 4).await;
//! println!("Loaded {} file(s)", stats.success_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{PdfPickError, Result};
use crate::io::format_file_size;

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    /// Create a new LoadedPdf from a document.
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// Result of a load operation (success or failure).
pub type LoadResult = Result<LoadedPdf>;

/// Statistics for a batch load operation.
#[derive(Debug, Clone)]
pub struct LoadStatistics {
    /// Number of PDFs successfully loaded.
    pub success_count: usize,

    /// Number of PDFs that failed to load.
    pub failure_count: usize,

    /// Total time taken for all loads.
    pub total_time: Duration,

    /// Total size of successfully loaded files.
    pub total_size: u64,

    /// Total number of pages loaded.
    pub total_pages: usize,
}

impl LoadStatistics {
    /// Create statistics from load results.
    fn from_results(results: &[LoadResult], total_time: Duration) -> Self {
        let mut success_count = 0;
        let mut failure_count = 0;
        let mut total_size = 0;
        let mut total_pages = 0;

        for result in results {
            match result {
                Ok(loaded) => {
                    success_count += 1;
                    total_size += loaded.file_size;
                    total_pages += loaded.page_count;
                }
                Err(_) => {
                    failure_count += 1;
                }
            }
        }

        Self {
            success_count,
            failure_count,
            total_time,
            total_size,
            total_pages,
        }
    }

    /// Format total size as human-readable string.
    pub fn format_total_size(&self) -> String {
        format_file_size(self.total_size)
    }
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to verify the document has pages after loading.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips verification (faster but less safe).
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// The synchronous `lopdf` parse runs inside a blocking task so the
    /// async runtime stays responsive.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::DocumentLoadFailed`] if the file cannot be
    /// parsed (corrupted, encrypted, or empty with verification enabled).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfpick::io::reader::PdfReader;
    /// # use std::path::Path;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let reader = PdfReader::new();
    /// let loaded = reader.load(Path::new("document.pdf")).await?;
    /// println!("Loaded {} pages in {:?}", loaded.page_count, loaded.load_time);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let verify = self.verify;

        let start = Instant::now();

        let (document, path_buf) = task::spawn_blocking(move || {
            let doc =
                Document::load(&path_buf).map_err(|e| classify_load_error(&path_buf, &e))?;

            if verify && doc.get_pages().is_empty() {
                return Err(PdfPickError::document_load_failed(
                    path_buf.clone(),
                    "document has no pages",
                ));
            }

            Ok::<_, PdfPickError>((doc, path_buf))
        })
        .await
        .map_err(|e| PdfPickError::other(format!("Load task failed: {e}")))??;

        let load_time = start.elapsed();

        Ok(LoadedPdf::new(document, path_buf, load_time))
    }

    /// Load multiple PDF documents sequentially.
    ///
    /// # Returns
    ///
    /// A vector of results, one for each input file in input order.
    pub async fn load_sequential(&self, paths: &[PathBuf]) -> Vec<LoadResult> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            results.push(self.load(path).await);
        }

        results
    }

    /// Load multiple PDF documents in parallel.
    ///
    /// Loads PDFs concurrently using the specified number of workers.
    /// Results are returned in input order regardless of completion order.
    pub async fn load_parallel(&self, paths: &[PathBuf], workers: usize) -> Vec<LoadResult> {
        use futures::stream::{self, StreamExt};

        let workers = workers.max(1);

        let tasks = paths.iter().enumerate().map(|(idx, path)| {
            let path = path.clone();
            let reader = self.clone();
            async move { (idx, reader.load(&path).await) }
        });

        let mut indexed: Vec<(usize, LoadResult)> = stream::iter(tasks)
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        indexed.sort_by_key(|(idx, _)| *idx);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Load all PDFs with automatic parallelization.
    ///
    /// Chooses sequential or parallel loading based on the number of files.
    /// Sequential is used for small batches to reduce overhead.
    ///
    /// # Returns
    ///
    /// A tuple of (results, statistics) where results contains the load
    /// outcome for each file in input order and statistics provides
    /// aggregate metrics.
    pub async fn load_all(
        &self,
        paths: &[PathBuf],
        max_workers: usize,
    ) -> (Vec<LoadResult>, LoadStatistics) {
        let start = Instant::now();

        let results = if paths.len() <= 3 {
            self.load_sequential(paths).await
        } else {
            self.load_parallel(paths, max_workers).await
        };

        let total_time = start.elapsed();
        let stats = LoadStatistics::from_results(&results, total_time);

        (results, stats)
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a `lopdf` load error to the crate error type.
fn classify_load_error(path: &Path, err: &lopdf::Error) -> PdfPickError {
    classify_load_message(path, &err.to_string())
}

/// Encrypted files are detected from the library message and given a
/// decryption hint, since they are the most common unreadable input.
fn classify_load_message(path: &Path, message: &str) -> PdfPickError {
    let lowered = message.to_lowercase();

    if lowered.contains("encrypt") || lowered.contains("password") {
        PdfPickError::document_load_failed(
            path.to_path_buf(),
            "file is encrypted; decrypt it first (e.g. with 'qpdf --decrypt')",
        )
    } else {
        PdfPickError::document_load_failed(path.to_path_buf(), message)
    }
}

//! Configuration module for pdfpick.
//!
//! This module transforms CLI arguments into a validated, normalized
//! configuration that drives a page-selection operation. It handles:
//! - Validation of argument combinations
//! - Resolution of conflicting options
//! - Application of defaults
//! - Output path planning for batch runs

use anyhow::{Result, bail};

use crate::range::PageSelection;
use std::path::{Path, PathBuf};

/// How a selection is applied to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Keep only the selected pages (extraction).
    Include,
    /// Keep every page except the selected ones (deletion).
    Exclude,
}

impl SelectionMode {
    /// Verb describing the operation, for user-facing messages.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Include => "extract",
            Self::Exclude => "delete",
        }
    }

    /// Past-tense verb, for summary messages.
    pub fn verb_past(&self) -> &'static str {
        match self {
            Self::Include => "extracted",
            Self::Exclude => "deleted",
        }
    }
}

/// PDF metadata overrides for the output document.
///
/// Fields left `None` keep whatever was carried over from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Document title.
    pub title: Option<String>,
    /// Document author.
    pub author: Option<String>,
    /// Document subject.
    pub subject: Option<String>,
    /// Document keywords (comma-separated).
    pub keywords: Option<String>,
}

impl Metadata {
    /// Check if any metadata fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
    }

    /// Create metadata from optional strings, trimming whitespace.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        subject: Option<String>,
        keywords: Option<String>,
    ) -> Self {
        let to_string_opt = |opt: Option<String>| {
            opt.filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
        };

        Self {
            title: to_string_opt(title),
            author: to_string_opt(author),
            subject: to_string_opt(subject),
            keywords: to_string_opt(keywords),
        }
    }
}

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Where output documents are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A single output file (valid for a single input).
    File(PathBuf),
    /// A directory; each output keeps its source file name.
    Directory(PathBuf),
}

/// Complete configuration for a page-selection operation.
///
/// This structure contains all settings needed to run an operation,
/// derived and validated from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF file paths.
    pub inputs: Vec<PathBuf>,

    /// Output file or directory.
    pub output: OutputTarget,

    /// Whether selected pages are kept or removed.
    pub mode: SelectionMode,

    /// The parsed page selection to apply to every input.
    pub selection: PageSelection,

    /// Dry run mode - validate and plan without creating output.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Metadata overrides for the output documents.
    pub metadata: Metadata,

    /// Continue on per-file errors instead of stopping.
    pub continue_on_error: bool,

    /// Number of parallel load jobs (None = auto-detect).
    pub jobs: Option<usize>,

    /// Emit machine-readable JSON stats instead of the summary text.
    pub json: bool,
}

impl Config {
    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// Checks for logical inconsistencies and invalid combinations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - Verbose and quiet modes are both enabled
    /// - Jobs count is zero
    /// - A single output file is given for several inputs
    /// - An output path collides with an input
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files specified");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if let Some(jobs) = self.jobs
            && jobs == 0
        {
            bail!("Number of jobs must be at least 1");
        }

        if let OutputTarget::File(_) = &self.output
            && self.inputs.len() > 1
        {
            bail!(
                "A single output file cannot hold {} inputs; use --out-dir",
                self.inputs.len()
            );
        }

        // In directory mode two inputs with the same file name would
        // silently overwrite each other.
        if let OutputTarget::Directory(_) = &self.output {
            let mut names: Vec<_> = self.inputs.iter().filter_map(|p| p.file_name()).collect();
            names.sort_unstable();
            for pair in names.windows(2) {
                if pair[0] == pair[1] {
                    bail!(
                        "Two inputs share the file name '{}'; outputs would collide in --out-dir",
                        pair[0].to_string_lossy()
                    );
                }
            }
        }

        for input in &self.inputs {
            let planned = self.output_path_for(input);
            if input == &planned {
                bail!(
                    "Output file cannot be the same as an input file: {}",
                    planned.display()
                );
            }
        }

        Ok(())
    }

    /// The planned output path for one input file.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        match &self.output {
            OutputTarget::File(path) => path.clone(),
            OutputTarget::Directory(dir) => match input.file_name() {
                Some(name) => dir.join(name),
                None => dir.join("output.pdf"),
            },
        }
    }

    /// The planned output path for every input, in input order.
    pub fn planned_outputs(&self) -> Vec<PathBuf> {
        self.inputs
            .iter()
            .map(|input| self.output_path_for(input))
            .collect()
    }

    /// Get the effective number of parallel load jobs.
    ///
    /// Returns the configured job count, or the number of CPU cores if
    /// auto-detect.
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Check if output should be displayed.
    ///
    /// Returns false if in quiet mode and not doing a dry run.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}

//! Utilities for collecting input paths.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{PdfPickError, Result};

/// Expand input arguments into concrete PDF file paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`. Each item may be:
/// - a file path, used as-is;
/// - a glob pattern (`"scans/*.pdf"`), expanded;
/// - a directory, walked recursively for `.pdf` files (sorted).
///
/// Duplicates are removed while the original order is kept. A literal
/// path that does not exist is passed through so validation can report
/// it with a proper error instead of it silently vanishing.
///
/// Errors:
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from glob and directory iterators.
pub fn collect_inputs<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let matcher = pdf_matcher()?;

    let mut resolved_paths = Vec::new();
    for pattern in patterns.into_iter() {
        let pattern = pattern.as_ref();
        let path = Path::new(pattern);

        if path.is_dir() {
            collect_dir(path, &matcher, &mut resolved_paths)?;
        } else {
            collect_pattern(pattern, &matcher, &mut resolved_paths)?;
        }
    }

    let mut seen = HashSet::new();
    resolved_paths.retain(|path| seen.insert(path.clone()));

    Ok(resolved_paths)
}

/// Expand a single glob pattern, recursing into matched directories.
///
/// Pattern examples:
/// - `"**/*.pdf"`
/// - `"./docs/*.pdf"`
fn collect_pattern(pattern: &str, matcher: &GlobSet, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = glob::glob(pattern).map_err(|err| PdfPickError::Other {
        message: err.to_string(),
    })?;

    let mut matched_any = false;
    for entry in entries {
        let path = entry.map_err(|err| PdfPickError::Other {
            message: err.to_string(),
        })?;

        matched_any = true;
        if path.is_dir() {
            collect_dir(&path, matcher, out)?;
        } else {
            out.push(path);
        }
    }

    // A literal path without glob metacharacters that matched nothing is
    // kept, so the validator can report FileNotFound for it by name.
    if !matched_any && !pattern.contains(['*', '?', '[']) {
        out.push(PathBuf::from(pattern));
    }

    Ok(())
}

/// Walk a directory recursively, collecting `.pdf` files in sorted order.
fn collect_dir(dir: &Path, matcher: &GlobSet, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| PdfPickError::Other {
            message: format!("Failed to walk {}: {err}", dir.display()),
        })?;

        if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
            out.push(entry.into_path());
        }
    }

    Ok(())
}

/// Case-insensitive matcher for PDF file names.
fn pdf_matcher() -> Result<GlobSet> {
    let glob = GlobBuilder::new("*.pdf")
        .case_insensitive(true)
        .build()
        .map_err(|err| PdfPickError::Other {
            message: err.to_string(),
        })?;

    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    builder.build().map_err(|err| PdfPickError::Other {
        message: err.to_string(),
    })
}

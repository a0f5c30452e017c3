//! Page-range expression parsing and resolution.
//!
//! A page-range expression is a comma-separated list of tokens; each token
//! is either a single 1-based page number (`"5"`) or an inclusive span
//! (`"1-3"`). Whitespace around tokens is ignored and empty tokens are
//! skipped, so `" 1-3, ,5 "` parses the same as `"1-3,5"`.
//!
//! Parsing happens in two phases. [`PageSelection::parse`] checks syntax
//! without knowing the document, so the CLI can reject malformed input
//! before any file is touched. [`PageSelection::resolve`] checks bounds
//! against a concrete page count and produces the final set of zero-based
//! page indices, sorted ascending with duplicates collapsed.

use std::collections::BTreeSet;

use crate::error::{PdfPickError, Result};

/// One token of a page-range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeToken {
    /// A single 1-based page number.
    Single(u32),
    /// An inclusive span of 1-based page numbers, start <= end.
    Span(u32, u32),
}

/// A parsed page-range expression.
///
/// Holds the syntax-checked tokens plus the original expression text for
/// error messages. Page numbers are kept 1-based here; the 1-based to
/// 0-based conversion happens exactly once, inside [`resolve`].
///
/// [`resolve`]: PageSelection::resolve
///
/// # Examples
///
/// ```
/// use pdfpick::range::PageSelection;
///
/// let selection = PageSelection::parse("1-3,5,7-9").unwrap();
/// assert_eq!(selection.resolve(10).unwrap(), vec![0, 1, 2, 4, 6, 7, 8]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    expr: String,
    tokens: Vec<RangeToken>,
}

impl PageSelection {
    /// Parse a page-range expression.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::InvalidRangeFormat`] when:
    /// - the expression is empty or all-whitespace;
    /// - a span token does not split into two valid page numbers around a
    ///   hyphen (`"1-2-3"`, `"-5"`, `"5-"`);
    /// - any token is not a valid positive integer (`"abc"`, `"0"`);
    /// - a span runs backwards (`"3-1"`).
    pub fn parse(expr: &str) -> Result<Self> {
        let mut tokens = Vec::new();

        for part in expr.split(',') {
            let part = part.trim();
            if part.is_empty() {
                // Empty tokens are skipped, e.g. "1,,3" or a trailing comma.
                continue;
            }

            if let Some((start, end)) = part.split_once('-') {
                let start = parse_page_number(expr, start)?;
                let end = parse_page_number(expr, end)?;

                if start > end {
                    return Err(PdfPickError::invalid_range(
                        expr,
                        format!("range {start}-{end} runs backwards (start must not exceed end)"),
                    ));
                }

                tokens.push(RangeToken::Span(start, end));
            } else {
                tokens.push(RangeToken::Single(parse_page_number(expr, part)?));
            }
        }

        if tokens.is_empty() {
            return Err(PdfPickError::invalid_range(
                expr,
                "expression contains no page numbers",
            ));
        }

        Ok(Self {
            expr: expr.to_string(),
            tokens,
        })
    }

    /// Build a selection from an explicit list of 1-based page numbers.
    ///
    /// This is the alternative input form for callers that already have a
    /// page list instead of an expression string.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::InvalidRangeFormat`] if the list is empty or
    /// contains page number 0.
    pub fn from_pages(pages: &[u32]) -> Result<Self> {
        let expr = pages
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",");

        if pages.is_empty() {
            return Err(PdfPickError::invalid_range(
                expr,
                "expression contains no page numbers",
            ));
        }

        for &page in pages {
            if page == 0 {
                return Err(PdfPickError::invalid_range(
                    expr,
                    "page numbers are 1-based; 0 is not a valid page",
                ));
            }
        }

        Ok(Self {
            tokens: pages.iter().map(|&p| RangeToken::Single(p)).collect(),
            expr,
        })
    }

    /// The original expression text.
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Check whether a 1-based page number is covered by this selection.
    pub fn contains(&self, page: u32) -> bool {
        self.tokens.iter().any(|token| match token {
            RangeToken::Single(p) => *p == page,
            RangeToken::Span(start, end) => page >= *start && page <= *end,
        })
    }

    /// Resolve the selection against a document's page count.
    ///
    /// Every covered page is inserted into a set as `page - 1`, so the
    /// 1-based to 0-based conversion happens at the point of insertion and
    /// duplicate or overlapping tokens collapse naturally. The result is
    /// strictly ascending, unique, and every member lies in
    /// `[0, page_count - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::InvalidRangeFormat`] if any page number or
    /// span bound exceeds `page_count`.
    pub fn resolve(&self, page_count: usize) -> Result<Vec<usize>> {
        let mut indices = BTreeSet::new();

        for token in &self.tokens {
            let (start, end) = match token {
                RangeToken::Single(p) => (*p, *p),
                RangeToken::Span(start, end) => (*start, *end),
            };

            if end as usize > page_count {
                return Err(PdfPickError::invalid_range(
                    &self.expr,
                    format!("page {end} is out of bounds (document has {page_count} page(s))"),
                ));
            }

            for page in start..=end {
                indices.insert(page as usize - 1);
            }
        }

        Ok(indices.into_iter().collect())
    }
}

/// Parse one page number, 1-based.
fn parse_page_number(expr: &str, part: &str) -> Result<u32> {
    let part = part.trim();

    let page: u32 = part.parse().map_err(|_| {
        PdfPickError::invalid_range(expr, format!("'{part}' is not a valid page number"))
    })?;

    if page == 0 {
        return Err(PdfPickError::invalid_range(
            expr,
            "page numbers are 1-based; 0 is not a valid page",
        ));
    }

    Ok(page)
}

/// Parse and resolve an expression in one step.
///
/// # Errors
///
/// Returns [`PdfPickError::InvalidRangeFormat`] for any syntax or bounds
/// violation; see [`PageSelection::parse`] and [`PageSelection::resolve`].
pub fn resolve_expression(expr: &str, page_count: usize) -> Result<Vec<usize>> {
    PageSelection::parse(expr)?.resolve(page_count)
}

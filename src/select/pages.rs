//! Building the output document from a page selection.
//!
//! The selector works on the page tree only: it computes the object ids of
//! the pages to keep, rebuilds the root Kids array around them, and prunes
//! everything the new tree no longer reaches. Page content streams are
//! never touched.

use lopdf::{Document, Object, ObjectId};

use crate::config::SelectionMode;
use crate::error::{PdfPickError, Result};

/// Builds new documents containing a subset of another document's pages.
pub struct PageSelector;

impl PageSelector {
    /// Create a new page selector.
    pub fn new() -> Self {
        Self
    }

    /// Build a new document from `doc` containing the selected pages.
    ///
    /// `indices` must be ascending, unique, zero-based page indices as
    /// produced by [`crate::range::PageSelection::resolve`]. In
    /// [`SelectionMode::Include`] the output contains exactly the pages at
    /// `indices`; in [`SelectionMode::Exclude`] it contains every other
    /// page. Either way pages keep their original document order.
    ///
    /// The caller is responsible for policy checks (non-empty selection,
    /// at least one page remaining); see
    /// [`crate::validation::Validator::validate_selection`].
    ///
    /// # Errors
    ///
    /// Returns [`PdfPickError::SelectionFailed`] if the page tree is
    /// malformed or the selection leaves nothing to keep.
    pub fn build(
        &self,
        doc: &Document,
        indices: &[usize],
        mode: SelectionMode,
    ) -> Result<Document> {
        let pages = doc.get_pages();

        let kept: Vec<ObjectId> = match mode {
            SelectionMode::Include => indices
                .iter()
                .filter_map(|&idx| pages.get(&(idx as u32 + 1)).copied())
                .collect(),
            SelectionMode::Exclude => pages
                .iter()
                .filter(|(number, _)| {
                    let idx = (**number as usize) - 1;
                    indices.binary_search(&idx).is_err()
                })
                .map(|(_, id)| *id)
                .collect(),
        };

        if kept.is_empty() {
            return Err(PdfPickError::selection_failed(
                "selection leaves no pages to keep",
            ));
        }

        if mode == SelectionMode::Include && kept.len() != indices.len() {
            return Err(PdfPickError::selection_failed(format!(
                "page tree is missing {} of the requested pages",
                indices.len() - kept.len()
            )));
        }

        let mut output = doc.clone();
        self.rebuild_page_tree(&mut output, &kept)?;

        // Drop everything the new tree no longer references and give the
        // output a clean id space.
        output.prune_objects();
        output.renumber_objects();

        Ok(output)
    }

    /// Replace the page tree so it contains only the given pages, in order.
    fn rebuild_page_tree(&self, doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let catalog = doc.catalog_mut().map_err(|e| {
            PdfPickError::selection_failed(format!("Failed to get catalog: {e}"))
        })?;

        let pages_id = catalog
            .get(b"Pages")
            .and_then(|p| p.as_reference())
            .map_err(|e| {
                PdfPickError::selection_failed(format!("Failed to get pages reference: {e}"))
            })?;

        let pages_obj = doc.get_object_mut(pages_id).map_err(|e| {
            PdfPickError::selection_failed(format!("Failed to get pages object: {e}"))
        })?;

        if let Object::Dictionary(dict) = pages_obj {
            let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

            dict.set("Kids", Object::Array(kids));
            dict.set("Count", Object::Integer(page_ids.len() as i64));
        } else {
            return Err(PdfPickError::selection_failed(
                "Pages object is not a dictionary",
            ));
        }

        // Pages may have lived under intermediate tree nodes that pruning
        // will remove; point them all at the root node.
        for &page_id in page_ids {
            let page_obj = doc.get_object_mut(page_id).map_err(|e| {
                PdfPickError::selection_failed(format!("Failed to get page: {e}"))
            })?;

            if let Object::Dictionary(dict) = page_obj {
                dict.set("Parent", Object::Reference(pages_id));
            } else {
                return Err(PdfPickError::selection_failed(
                    "Page object is not a dictionary",
                ));
            }
        }

        Ok(())
    }

    /// Get the number of pages in a document.
    pub fn page_count(&self, doc: &Document) -> usize {
        doc.get_pages().len()
    }
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new()
    }
}

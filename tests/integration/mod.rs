//! Shared helpers for the integration tests.
//!
//! Test documents are built programmatically: page `i` (0-based) gets a
//! MediaBox width of `600 + i`, so pages stay identifiable after any
//! selection without inspecting content streams.

mod delete;
mod error_cases;
mod extract;
mod metadata;

use lopdf::{Dictionary, Document, Object, dictionary};
use std::path::{Path, PathBuf};

use pdfpick::config::{Config, Metadata, OutputTarget, OverwriteMode, SelectionMode};
use pdfpick::range::PageSelection;

/// Build an in-memory document with the given number of pages.
pub fn build_pdf(pages: usize) -> Document {
    let mut doc = Document::with_version("1.4");

    let catalog_id = doc.new_object_id();
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();
    for i in 0..pages {
        let page_id = doc.new_object_id();
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), (600 + i as i64).into(), 792.into()],
        };
        doc.objects.insert(page_id, page.into());
        page_ids.push(page_id);
    }

    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.into_iter().map(|id| id.into()).collect::<Vec<Object>>(),
        "Count" => pages as i64,
    };

    doc.objects.insert(catalog_id, catalog.into());
    doc.objects.insert(pages_id, pages_dict.into());
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a fresh test document to `dir/name` and return its path.
pub fn write_pdf(dir: &Path, name: &str, pages: usize) -> PathBuf {
    let mut doc = build_pdf(pages);
    let path = dir.join(name);
    doc.save(&path).expect("failed to save test PDF");
    path
}

/// Write a test document carrying an Info dictionary.
pub fn write_pdf_with_info(
    dir: &Path,
    name: &str,
    pages: usize,
    fields: &[(&str, Object)],
) -> PathBuf {
    let mut doc = build_pdf(pages);

    let mut info = Dictionary::new();
    for (field, value) in fields {
        info.set(field.as_bytes().to_vec(), value.clone());
    }
    let info_id = doc.new_object_id();
    doc.objects.insert(info_id, Object::Dictionary(info));
    doc.trailer.set("Info", Object::Reference(info_id));

    let path = dir.join(name);
    doc.save(&path).expect("failed to save test PDF");
    path
}

/// MediaBox widths of the document's pages, in page order.
///
/// Width `600 + i` identifies the page that was at 0-based index `i` in
/// the document the helpers built.
pub fn page_widths(doc: &Document) -> Vec<i64> {
    let mut widths = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let Ok(Object::Dictionary(dict)) = doc.get_object(page_id) else {
            panic!("page is not a dictionary");
        };
        let Ok(Object::Array(media_box)) = dict.get(b"MediaBox") else {
            panic!("page has no MediaBox");
        };
        widths.push(media_box[2].as_i64().expect("width is not an integer"));
    }
    widths
}

/// A quiet, force-overwrite config for the given operation.
pub fn make_config(
    inputs: Vec<PathBuf>,
    output: OutputTarget,
    mode: SelectionMode,
    pages: &str,
) -> Config {
    Config {
        inputs,
        output,
        mode,
        selection: PageSelection::parse(pages).expect("test expression must parse"),
        dry_run: false,
        verbose: false,
        quiet: true,
        overwrite_mode: OverwriteMode::Force,
        metadata: Metadata::default(),
        continue_on_error: false,
        jobs: None,
        json: false,
    }
}

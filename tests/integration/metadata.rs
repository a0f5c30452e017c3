//! Metadata carry-over through the full pipeline.

use lopdf::Object;
use tempfile::TempDir;

use pdfpick::config::{Metadata, OutputTarget, SelectionMode};
use pdfpick::io::{PdfReader, PdfWriter};
use pdfpick::select::{MetadataCopier, MetadataWarning, Selector};

use super::{make_config, write_pdf_with_info};

#[tokio::test]
async fn metadata_survives_extraction() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf_with_info(
        temp_dir.path(),
        "in.pdf",
        5,
        &[
            ("Title", Object::string_literal("Quarterly Report")),
            ("Author", Object::string_literal("Finance")),
            ("Producer", Object::string_literal("scanner 9000")),
        ],
    );
    let out_path = temp_dir.path().join("out.pdf");

    let config = make_config(
        vec![input],
        OutputTarget::File(out_path.clone()),
        SelectionMode::Include,
        "1-2",
    );

    let report = Selector::new().run(&config).await.unwrap();
    let outcome = &report.outcomes[0];
    assert!(outcome.warnings.is_empty());

    // The fields survive serialization and a fresh load too.
    PdfWriter::new()
        .save(&outcome.document, &out_path)
        .await
        .unwrap();
    let reloaded = PdfReader::new().load(&out_path).await.unwrap();

    assert_eq!(
        MetadataCopier::read_field(&reloaded.document, "Title"),
        Some("Quarterly Report".to_string())
    );
    assert_eq!(
        MetadataCopier::read_field(&reloaded.document, "Author"),
        Some("Finance".to_string())
    );
    assert_eq!(
        MetadataCopier::read_field(&reloaded.document, "Producer"),
        Some("scanner 9000".to_string())
    );
}

#[tokio::test]
async fn unreadable_field_warns_without_failing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf_with_info(
        temp_dir.path(),
        "in.pdf",
        3,
        &[
            ("Title", Object::Integer(7)),
            ("Author", Object::string_literal("Someone")),
        ],
    );

    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Exclude,
        "3",
    );

    let report = Selector::new().run(&config).await.unwrap();
    let outcome = &report.outcomes[0];

    // The operation succeeds; the unreadable field is a warning, and the
    // readable one still comes across.
    assert_eq!(
        outcome.warnings,
        vec![MetadataWarning::NotText { field: "Title" }]
    );
    assert_eq!(MetadataCopier::read_field(&outcome.document, "Title"), None);
    assert_eq!(
        MetadataCopier::read_field(&outcome.document, "Author"),
        Some("Someone".to_string())
    );
    assert_eq!(outcome.document.get_pages().len(), 2);
}

#[tokio::test]
async fn overrides_take_precedence_over_carried_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf_with_info(
        temp_dir.path(),
        "in.pdf",
        4,
        &[
            ("Title", Object::string_literal("Original")),
            ("Subject", Object::string_literal("Carried")),
        ],
    );

    let mut config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Include,
        "1",
    );
    config.metadata = Metadata::new(Some("Overridden".to_string()), None, None, None);

    let report = Selector::new().run(&config).await.unwrap();
    let document = &report.outcomes[0].document;

    assert_eq!(
        MetadataCopier::read_field(document, "Title"),
        Some("Overridden".to_string())
    );
    assert_eq!(
        MetadataCopier::read_field(document, "Subject"),
        Some("Carried".to_string())
    );
}

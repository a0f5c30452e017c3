//! Error-path tests for the full pipeline.

use rstest::rstest;
use std::io::Write;
use tempfile::TempDir;

use pdfpick::PdfPickError;
use pdfpick::config::{OutputTarget, SelectionMode};
use pdfpick::range::PageSelection;
use pdfpick::select::Selector;
use pdfpick::validation::Validator;

use super::{make_config, write_pdf};

#[rstest]
#[case::empty("")]
#[case::whitespace("  ")]
#[case::not_numeric("abc")]
#[case::backwards("3-1")]
#[case::double_hyphen("1-2-3")]
#[case::zero("0")]
fn malformed_expressions_are_rejected(#[case] expr: &str) {
    let err = PageSelection::parse(expr).unwrap_err();
    assert!(matches!(err, PdfPickError::InvalidRangeFormat { .. }));
}

#[tokio::test]
async fn selection_beyond_document_bounds_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 10);

    // "11" parses fine; resolution against 10 pages rejects it.
    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Include,
        "11",
    );

    let result = Selector::new().run(&config).await;
    assert!(matches!(
        result,
        Err(PdfPickError::InvalidRangeFormat { .. })
    ));
}

#[tokio::test]
async fn missing_input_is_reported_by_name() {
    let missing = std::path::PathBuf::from("/no/such/dir/missing.pdf");

    let validator = Validator::new();
    let err = validator.validate_file(&missing).await.unwrap_err();

    assert!(matches!(err, PdfPickError::FileNotFound { .. }));
    assert!(format!("{err}").contains("missing.pdf"));
}

#[tokio::test]
async fn garbage_input_fails_to_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("garbage.pdf");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"%PDF-bogus not actually a pdf").unwrap();

    let config = make_config(
        vec![path],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Include,
        "1",
    );

    let result = Selector::new().run(&config).await;
    assert!(matches!(
        result,
        Err(PdfPickError::DocumentLoadFailed { .. })
    ));
}

#[tokio::test]
async fn continue_on_error_processes_the_good_files() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_pdf(temp_dir.path(), "good.pdf", 5);
    let tiny = write_pdf(temp_dir.path(), "tiny.pdf", 1);
    let garbage = temp_dir.path().join("garbage.pdf");
    std::fs::write(&garbage, b"nope").unwrap();

    // Deleting page 1 would empty tiny.pdf, so it is skipped alongside the
    // unreadable file while good.pdf still goes through.
    let mut config = make_config(
        vec![good, garbage, tiny],
        OutputTarget::Directory(temp_dir.path().join("out")),
        SelectionMode::Exclude,
        "1",
    );
    config.continue_on_error = true;

    let report = Selector::new().run(&config).await.unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert!(report.outcomes[0].source.ends_with("good.pdf"));
    assert_eq!(report.skipped.len(), 2);
    assert!(
        report
            .skipped
            .iter()
            .all(|skipped| skipped.error.is_recoverable())
    );
}

#[tokio::test]
async fn run_with_only_bad_inputs_fails() {
    let temp_dir = TempDir::new().unwrap();
    let garbage = temp_dir.path().join("garbage.pdf");
    std::fs::write(&garbage, b"nope").unwrap();

    let mut config = make_config(
        vec![garbage],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Include,
        "1",
    );
    config.continue_on_error = true;

    let result = Selector::new().run(&config).await;
    assert!(matches!(result, Err(PdfPickError::NoInputFiles)));
}

#[test]
fn output_colliding_with_input_is_rejected() {
    let config = make_config(
        vec![std::path::PathBuf::from("same.pdf")],
        OutputTarget::File(std::path::PathBuf::from("same.pdf")),
        SelectionMode::Include,
        "1",
    );

    assert!(config.validate().is_err());
}

#[tokio::test]
async fn missing_output_directory_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 2);

    let config = make_config(
        vec![input],
        OutputTarget::Directory(temp_dir.path().join("does-not-exist")),
        SelectionMode::Include,
        "1",
    );

    let validator = Validator::new();
    let err = validator.validate_output(&config).await.unwrap_err();
    assert!(matches!(err, PdfPickError::InvalidConfig { .. }));
}

//! End-to-end deletion tests.

use tempfile::TempDir;

use pdfpick::PdfPickError;
use pdfpick::config::{OutputTarget, SelectionMode};
use pdfpick::io::{PdfReader, PdfWriter};
use pdfpick::select::Selector;

use super::{make_config, page_widths, write_pdf};

#[tokio::test]
async fn delete_keeps_complement_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 6);

    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Exclude,
        "2,5",
    );

    let report = Selector::new().run(&config).await.unwrap();
    let outcome = &report.outcomes[0];

    assert_eq!(page_widths(&outcome.document), vec![600, 602, 603, 605]);
    assert_eq!(outcome.stats.affected, 2);
    assert_eq!(outcome.stats.remaining, 4);
}

#[tokio::test]
async fn delete_first_and_last_pages() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 5);

    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Exclude,
        "1,5",
    );

    let report = Selector::new().run(&config).await.unwrap();
    assert_eq!(page_widths(&report.outcomes[0].document), vec![601, 602, 603]);
}

#[tokio::test]
async fn delete_of_every_page_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 4);

    // The policy check runs before the selector; the output never exists.
    let out_path = temp_dir.path().join("out.pdf");
    let config = make_config(
        vec![input],
        OutputTarget::File(out_path.clone()),
        SelectionMode::Exclude,
        "1-4",
    );

    let result = Selector::new().run(&config).await;
    assert!(matches!(
        result,
        Err(PdfPickError::WouldDeleteAllPages {
            requested: 4,
            total_pages: 4,
        })
    ));
    assert!(!out_path.exists());
}

#[tokio::test]
async fn delete_overlapping_selection_covering_all_pages_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 3);

    // Overlaps dedup to {1,2,3}, which covers the whole document.
    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Exclude,
        "1-2,2-3,1",
    );

    let result = Selector::new().run(&config).await;
    assert!(matches!(
        result,
        Err(PdfPickError::WouldDeleteAllPages { .. })
    ));
}

#[tokio::test]
async fn delete_round_trips_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 5);
    let out_path = temp_dir.path().join("out.pdf");

    let config = make_config(
        vec![input],
        OutputTarget::File(out_path.clone()),
        SelectionMode::Exclude,
        "1-3",
    );

    let report = Selector::new().run(&config).await.unwrap();
    PdfWriter::new()
        .save(&report.outcomes[0].document, &out_path)
        .await
        .unwrap();

    let reloaded = PdfReader::new().load(&out_path).await.unwrap();
    assert_eq!(reloaded.page_count, 2);
    assert_eq!(page_widths(&reloaded.document), vec![603, 604]);
}

//! End-to-end extraction tests.

use tempfile::TempDir;

use pdfpick::config::{OutputTarget, SelectionMode};
use pdfpick::io::{PdfReader, PdfWriter};
use pdfpick::select::Selector;

use super::{make_config, page_widths, write_pdf};

#[tokio::test]
async fn extract_preserves_document_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 10);

    // Token order "5,1-3" must not matter: output is pages 1,2,3,5 in
    // original document order, never 5,1,2,3.
    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Include,
        "5,1-3",
    );

    let report = Selector::new().run(&config).await.unwrap();
    let outcome = &report.outcomes[0];

    assert_eq!(page_widths(&outcome.document), vec![600, 601, 602, 604]);
    assert_eq!(outcome.stats.affected, 4);
    assert_eq!(outcome.stats.remaining, 6);
}

#[tokio::test]
async fn extract_single_page() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 3);

    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Include,
        "2",
    );

    let report = Selector::new().run(&config).await.unwrap();

    assert_eq!(page_widths(&report.outcomes[0].document), vec![601]);
}

#[tokio::test]
async fn extract_overlapping_ranges_count_once() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 10);

    let config = make_config(
        vec![input],
        OutputTarget::File(temp_dir.path().join("out.pdf")),
        SelectionMode::Include,
        "1-4,3-5,4",
    );

    let report = Selector::new().run(&config).await.unwrap();
    let outcome = &report.outcomes[0];

    assert_eq!(
        page_widths(&outcome.document),
        vec![600, 601, 602, 603, 604]
    );
    // Stats derive from the deduplicated set, not a re-parse of the
    // expression, so the overlap is counted once.
    assert_eq!(outcome.stats.affected, 5);
    assert!((outcome.stats.percentage - 50.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn extract_round_trips_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 6);
    let out_path = temp_dir.path().join("out.pdf");

    let config = make_config(
        vec![input],
        OutputTarget::File(out_path.clone()),
        SelectionMode::Include,
        "2-4",
    );

    let report = Selector::new().run(&config).await.unwrap();
    PdfWriter::new()
        .save(&report.outcomes[0].document, &out_path)
        .await
        .unwrap();

    let reloaded = PdfReader::new().load(&out_path).await.unwrap();
    assert_eq!(reloaded.page_count, 3);
    assert_eq!(page_widths(&reloaded.document), vec![601, 602, 603]);
}

#[tokio::test]
async fn extract_composes() {
    // Extracting pages {2,4} of a 5-page document and then pages {1,2}
    // of the result equals extracting {2,4} directly.
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 5);
    let first_out = temp_dir.path().join("first.pdf");
    let second_out = temp_dir.path().join("second.pdf");

    let config = make_config(
        vec![input],
        OutputTarget::File(first_out.clone()),
        SelectionMode::Include,
        "2,4",
    );
    let report = Selector::new().run(&config).await.unwrap();
    PdfWriter::new()
        .save(&report.outcomes[0].document, &first_out)
        .await
        .unwrap();

    let config = make_config(
        vec![first_out],
        OutputTarget::File(second_out),
        SelectionMode::Include,
        "1,2",
    );
    let report = Selector::new().run(&config).await.unwrap();

    assert_eq!(page_widths(&report.outcomes[0].document), vec![601, 603]);
}

#[tokio::test]
async fn extract_is_stable_across_fresh_loads() {
    // The same selection on equivalent fresh loads of the same source
    // yields the same page ordering both times.
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "in.pdf", 5);

    let mut orderings = Vec::new();
    for round in 0..2 {
        let config = make_config(
            vec![input.clone()],
            OutputTarget::File(temp_dir.path().join(format!("out{round}.pdf"))),
            SelectionMode::Include,
            "1-2",
        );
        let report = Selector::new().run(&config).await.unwrap();
        orderings.push(page_widths(&report.outcomes[0].document));
    }

    assert_eq!(orderings[0], vec![600, 601]);
    assert_eq!(orderings[0], orderings[1]);
}

#[tokio::test]
async fn extract_batch_writes_one_output_per_input() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", 4);
    let b = write_pdf(temp_dir.path(), "b.pdf", 6);
    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    let config = make_config(
        vec![a, b],
        OutputTarget::Directory(out_dir.clone()),
        SelectionMode::Include,
        "1-2",
    );

    let report = Selector::new().run(&config).await.unwrap();
    assert_eq!(report.outcomes.len(), 2);

    let writer = PdfWriter::new();
    for outcome in &report.outcomes {
        let out_path = config.output_path_for(&outcome.source);
        writer.save(&outcome.document, &out_path).await.unwrap();
    }

    for name in ["a.pdf", "b.pdf"] {
        let reloaded = PdfReader::new().load(&out_dir.join(name)).await.unwrap();
        assert_eq!(reloaded.page_count, 2);
    }
}

use lopdf::{Dictionary, Document, Object, Stream};
use pdf_cover::{CoverAssets, CoverInputs, CoverLayout, render_cover};
use pdf_package::*;

/// Helper to create a test PDF whose pages are `width` points wide
fn create_test_pdf(num_pages: usize, width: i64) -> Document {
    let mut doc = Document::with_version("1.7");

    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

fn pdf_bytes(num_pages: usize, width: i64) -> Vec<u8> {
    let mut doc = create_test_pdf(num_pages, width);
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn bytes_source(name: &str, num_pages: usize, width: i64) -> DocumentSource {
    DocumentSource::Bytes {
        name: name.to_string(),
        bytes: pdf_bytes(num_pages, width),
    }
}

fn cover_bytes() -> Vec<u8> {
    let inputs = CoverInputs {
        project_name: "Harbor Pump Station".to_string(),
        ..Default::default()
    };
    render_cover(&inputs, &CoverAssets::default(), &CoverLayout::default())
        .unwrap()
        .bytes
}

/// Page widths in merged order
fn page_widths(doc: &Document) -> Vec<f32> {
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_float().unwrap()
        })
        .collect()
}

#[test]
fn test_merge_preserves_document_and_page_order() {
    let documents = vec![
        create_test_pdf(1, 100),
        create_test_pdf(2, 200),
        create_test_pdf(1, 300),
    ];

    let merged = merge_documents(&documents).unwrap();
    assert_eq!(page_widths(&merged), vec![100.0, 200.0, 200.0, 300.0]);
}

#[test]
fn test_merged_document_round_trips() {
    let mut merged = merge_documents(&[create_test_pdf(2, 612), create_test_pdf(3, 612)]).unwrap();
    let mut bytes = Vec::new();
    merged.save_to(&mut bytes).unwrap();

    let reloaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(reloaded.get_pages().len(), 5);
}

#[tokio::test]
async fn test_cover_is_first_page() {
    let sources = vec![bytes_source("first", 2, 300), bytes_source("second", 1, 400)];

    let report = assemble_package(cover_bytes(), &sources, &AssemblyOptions::default())
        .await
        .unwrap();

    assert_eq!(report.page_count(), 4);
    assert_eq!(report.included, vec!["first", "second"]);
    assert!(report.skipped.is_empty());

    let widths = page_widths(&report.document);
    assert!((widths[0] - 612.0).abs() < 0.5);
    assert_eq!(&widths[1..], &[300.0, 300.0, 400.0]);
}

#[tokio::test]
async fn test_failed_sources_are_skipped() {
    let sources = vec![
        bytes_source("good", 1, 300),
        DocumentSource::Bytes {
            name: "garbage".to_string(),
            bytes: b"this is not a pdf".to_vec(),
        },
        DocumentSource::upload("/nonexistent/sheet.pdf"),
        bytes_source("empty", 0, 300),
        bytes_source("also good", 1, 400),
    ];

    let report = assemble_package(cover_bytes(), &sources, &AssemblyOptions::default())
        .await
        .unwrap();

    assert_eq!(report.included, vec!["good", "also good"]);
    let skipped: Vec<&str> = report.skipped.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(skipped, vec!["garbage", "sheet.pdf", "empty"]);
    assert!(report.skipped.iter().all(|s| !s.reason.is_empty()));
    assert_eq!(report.page_count(), 3);
}

#[tokio::test]
async fn test_unreadable_cover_is_fatal() {
    let result = assemble_package(
        b"not a pdf".to_vec(),
        &[bytes_source("good", 1, 300)],
        &AssemblyOptions::default(),
    )
    .await;
    assert!(matches!(result, Err(PackageError::Pdf(_))));
}

#[tokio::test]
async fn test_title_written_to_info() {
    let options = AssemblyOptions {
        title: Some("Harbor Pump Station Submittal".to_string()),
        ..Default::default()
    };
    let report = assemble_package(cover_bytes(), &[], &options).await.unwrap();

    let info_id = report
        .document
        .trailer
        .get(b"Info")
        .unwrap()
        .as_reference()
        .unwrap();
    let info = report.document.get_dictionary(info_id).unwrap();
    let title = info.get(b"Title").unwrap().as_str().unwrap();
    assert_eq!(title, b"Harbor Pump Station Submittal");
}

#[tokio::test]
async fn test_build_package_from_state() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("valve.pdf");
    std::fs::write(&upload, pdf_bytes(2, 612)).unwrap();

    let mut state = PackageState::new();
    state.project_name = "Harbor Pump Station".to_string();
    state.add_upload(DocumentSource::upload(&upload));

    let report = build_package(
        &state,
        &CoverAssets::default(),
        &CoverLayout::default(),
        &AssemblyOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(report.page_count(), 3);
    assert_eq!(report.included, vec!["valve.pdf"]);
    // No logo configured
    assert_eq!(report.cover_warnings.len(), 1);

    let output = dir.path().join("package.pdf");
    save_pdf(report.document, &output).await.unwrap();
    let reloaded = load_pdf(&output).await.unwrap();
    assert_eq!(reloaded.get_pages().len(), 3);
}

use pdf_package::*;

const CATALOG_CSV: &str = "\
Category,Subcategory,Model,Description,URL,Image
Valves,Gate,GV-100,Resilient wedge gate valve,https://example.com/gv100.pdf,gv100.png
Valves,Gate,GV-200,Double disc gate valve,https://example.com/gv200.pdf,
Valves,Butterfly,BF-10,Butterfly valve,https://example.com/bf10.pdf,
Hydrants,Dry Barrel,H-5,,https://example.com/h5.pdf,
Hydrants,Dry Barrel,,Missing model,https://example.com/none.pdf,
Hydrants,Wet Barrel,H-9,Missing url,,
";

#[test]
fn test_rows_without_model_or_url_are_dropped() {
    let catalog = Catalog::from_reader(CATALOG_CSV.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 4);
    assert!(catalog.find_model("H-9").is_none());
}

#[test]
fn test_categories_in_first_seen_order() {
    let catalog = Catalog::from_reader(CATALOG_CSV.as_bytes()).unwrap();
    assert_eq!(catalog.categories(), vec!["Valves", "Hydrants"]);
    assert_eq!(catalog.subcategories("Valves"), vec!["Gate", "Butterfly"]);
    // Wet Barrel only had a dropped row
    assert_eq!(catalog.subcategories("Hydrants"), vec!["Dry Barrel"]);
}

#[test]
fn test_products_filter_by_category_and_subcategory() {
    let catalog = Catalog::from_reader(CATALOG_CSV.as_bytes()).unwrap();
    let models: Vec<&str> = catalog
        .products("Valves", "Gate")
        .map(|entry| entry.model.as_str())
        .collect();
    assert_eq!(models, vec!["GV-100", "GV-200"]);
    assert_eq!(catalog.products("Valves", "Check").count(), 0);
}

#[test]
fn test_find_model_ignores_case() {
    let catalog = Catalog::from_reader(CATALOG_CSV.as_bytes()).unwrap();
    let entry = catalog.find_model("gv-200").unwrap();
    assert_eq!(entry.description, "Double disc gate valve");
    assert_eq!(
        entry.to_source(),
        DocumentSource::Remote {
            name: "GV-200".to_string(),
            url: "https://example.com/gv200.pdf".to_string(),
        }
    );
}

#[test]
fn test_headers_are_case_insensitive_and_reorderable() {
    let csv = "url,MODEL,category,subcategory,image,description\n\
               https://example.com/a.pdf,A-1,Pipe,Ductile,,Pipe A\n";
    let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
    let entry = catalog.find_model("A-1").unwrap();
    assert_eq!(entry.category, "Pipe");
    assert_eq!(entry.url, "https://example.com/a.pdf");
}

#[test]
fn test_missing_column_is_config_error() {
    let csv = "Category,Subcategory,Model,Description,URL\nA,B,C,D,E\n";
    assert!(matches!(
        Catalog::from_reader(csv.as_bytes()),
        Err(PackageError::Config(_))
    ));
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, CATALOG_CSV).unwrap();

    let catalog = Catalog::load(&path).await.unwrap();
    assert_eq!(catalog.len(), 4);
}

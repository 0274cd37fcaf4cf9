use chrono::NaiveDate;
use pdf_cover::{BidDate, PartyRole};
use pdf_package::*;

fn entry(model: &str) -> CatalogEntry {
    CatalogEntry {
        category: "Valves".to_string(),
        subcategory: "Gate".to_string(),
        model: model.to_string(),
        description: String::new(),
        url: format!("https://example.com/{model}.pdf"),
        image: String::new(),
    }
}

fn labels(state: &PackageState) -> Vec<&str> {
    state.items().iter().map(PackageItem::label).collect()
}

#[test]
fn test_select_role_toggles() {
    let mut state = PackageState::new();
    state.select_role(PartyRole::Engineer);
    assert_eq!(state.role(), Some(PartyRole::Engineer));

    state.select_role(PartyRole::Utility);
    assert_eq!(state.role(), Some(PartyRole::Utility));

    state.select_role(PartyRole::Utility);
    assert_eq!(state.role(), None);
}

#[test]
fn test_bid_date_flags_are_exclusive() {
    let mut state = PackageState::new();
    state.set_bid_date_tbc(true);
    state.set_bid_date_na(true);
    assert!(state.bid_date_na());
    assert!(!state.bid_date_tbc());

    state.set_bid_date_tbc(true);
    assert!(state.bid_date_tbc());
    assert!(!state.bid_date_na());

    state.set_bid_date_tbc(false);
    assert!(!state.bid_date_tbc());
    assert!(!state.bid_date_na());
}

#[test]
fn test_cover_inputs_resolve_flags() {
    let mut state = PackageState::new();
    state.project_name = "Harbor Pump Station".to_string();
    state.date_prepared = NaiveDate::from_ymd_opt(2024, 3, 5);
    state.bid_date = NaiveDate::from_ymd_opt(2024, 4, 1);

    let inputs = state.cover_inputs();
    assert_eq!(inputs.bid_date, BidDate::Date(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    assert_eq!(inputs.date_prepared, NaiveDate::from_ymd_opt(2024, 3, 5));

    state.set_bid_date_na(true);
    state.set_date_prepared_unknown(true);
    let inputs = state.cover_inputs();
    assert_eq!(inputs.bid_date, BidDate::NotApplicable);
    assert_eq!(inputs.date_prepared, None);

    state.set_bid_date_na(false);
    state.bid_date = None;
    assert_eq!(state.cover_inputs().bid_date, BidDate::ToBeConfirmed);
}

#[test]
fn test_queue_skips_duplicate_models() {
    let mut state = PackageState::new();
    assert!(state.queue_entry(entry("GV-100")));
    assert!(!state.queue_entry(entry("GV-100")));
    assert!(state.queue_entry(entry("GV-200")));
    assert_eq!(labels(&state), vec!["GV-100", "GV-200"]);

    assert!(state.dequeue("GV-100"));
    assert!(!state.dequeue("GV-100"));
    assert_eq!(labels(&state), vec!["GV-200"]);
}

#[test]
fn test_clear_queue_keeps_uploads() {
    let mut state = PackageState::new();
    state.add_upload(DocumentSource::upload("/tmp/a.pdf"));
    state.queue_entry(entry("GV-100"));
    state.add_upload(DocumentSource::upload("/tmp/b.pdf"));

    state.clear_queue();
    assert_eq!(labels(&state), vec!["a.pdf", "b.pdf"]);

    assert!(state.remove_upload("a.pdf"));
    assert!(!state.remove_upload("a.pdf"));
    assert_eq!(labels(&state), vec!["b.pdf"]);
}

#[test]
fn test_move_item() {
    let mut state = PackageState::new();
    state.add_upload(DocumentSource::upload("/tmp/a.pdf"));
    state.queue_entry(entry("GV-100"));
    state.add_upload(DocumentSource::upload("/tmp/b.pdf"));

    assert!(state.move_item(2, 0));
    assert_eq!(labels(&state), vec!["b.pdf", "a.pdf", "GV-100"]);

    assert!(!state.move_item(3, 0));
    assert_eq!(labels(&state), vec!["b.pdf", "a.pdf", "GV-100"]);
}

#[test]
fn test_apply_order_ignores_bad_indices_and_appends_missing() {
    let mut state = PackageState::new();
    for name in ["a", "b", "c", "d"] {
        state.add_upload(DocumentSource::upload(format!("/tmp/{name}.pdf")));
    }

    state.apply_order(&[2, 9, 2, 0]);
    assert_eq!(labels(&state), vec!["c.pdf", "a.pdf", "b.pdf", "d.pdf"]);
}

#[test]
fn test_ordered_sources_follow_item_order() {
    let mut state = PackageState::new();
    state.queue_entry(entry("GV-100"));
    state.add_upload(DocumentSource::upload("/tmp/a.pdf"));

    let sources = state.ordered_sources();
    assert_eq!(sources.len(), 2);
    assert!(matches!(&sources[0], DocumentSource::Remote { url, .. } if url.ends_with("GV-100.pdf")));
    assert!(matches!(&sources[1], DocumentSource::Upload { .. }));
}

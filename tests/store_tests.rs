//! Integration tests for the entry store contract

use journali::{EntryId, JournalEntry, SortOrder};

mod common;
use common::store_at;

fn ids(view: &[&JournalEntry]) -> Vec<EntryId> {
    view.iter().map(|e| e.id()).collect()
}

#[test]
fn test_morning_evening_scenario() {
    let mut store = store_at(&[1000, 2000]);
    let a = store.add("Morning", "Coffee").id();
    let b = store.add("Evening", "Tea").id();

    assert_eq!(ids(&store.derived_view()), vec![b, a]);

    store.toggle_sort_direction();
    assert_eq!(store.query().sort, SortOrder::OldestFirst);
    assert_eq!(ids(&store.derived_view()), vec![a, b]);

    store.toggle_bookmark(b).unwrap();
    store.set_bookmarks_only(true);
    assert_eq!(ids(&store.derived_view()), vec![b]);
}

#[test]
fn test_every_add_is_retrievable() {
    let inputs = [
        ("first", "one", 500),
        ("", "", 100),
        ("third", "line\nline", 900),
        ("fourth", "", 300),
    ];
    let times: Vec<i64> = inputs.iter().map(|(_, _, t)| *t).collect();
    let mut store = store_at(&times);

    let added: Vec<EntryId> = inputs
        .iter()
        .map(|(title, content, _)| store.add(*title, *content).id())
        .collect();

    assert_eq!(store.len(), inputs.len());
    for (id, (title, content, secs)) in added.iter().zip(inputs.iter()) {
        let entry = store.get(*id).unwrap();
        assert_eq!(entry.title(), *title);
        assert_eq!(entry.content(), *content);
        assert_eq!(entry.date().timestamp(), *secs);
        assert!(!entry.is_bookmarked());
    }
}

#[test]
fn test_unfiltered_view_contains_everything_in_date_order() {
    let mut store = store_at(&[300, 100, 200]);
    let c = store.add("c", "").id();
    let a = store.add("a", "").id();
    let b = store.add("b", "").id();

    assert_eq!(ids(&store.derived_view()), vec![c, b, a]);
    store.toggle_sort_direction();
    assert_eq!(ids(&store.derived_view()), vec![a, b, c]);
}

#[test]
fn test_operations_after_delete_are_no_ops() {
    let mut store = store_at(&[1, 2]);
    let gone = store.add("gone", "").id();
    let kept = store.add("kept", "body").id();

    let removed = store.delete(gone).unwrap();
    assert_eq!(removed.title(), "gone");
    assert_eq!(store.len(), 1);

    assert!(store.update(gone, "x", "y").is_err());
    assert!(store.delete(gone).is_err());
    assert!(store.toggle_bookmark(gone).is_err());

    assert_eq!(store.len(), 1);
    let survivor = store.get(kept).unwrap();
    assert_eq!(survivor.title(), "kept");
    assert_eq!(survivor.content(), "body");
    assert!(!survivor.is_bookmarked());
}

#[test]
fn test_update_only_touches_title_and_content() {
    let mut store = store_at(&[42]);
    let id = store.add("t", "c").id();
    store.toggle_bookmark(id).unwrap();

    store.update(id, "t2", "c2").unwrap();
    store.update(id, "", "").unwrap();

    let entry = store.get(id).unwrap();
    assert_eq!(entry.title(), "");
    assert_eq!(entry.content(), "");
    assert_eq!(entry.date().timestamp(), 42);
    assert!(entry.is_bookmarked());
}

#[test]
fn test_search_cat_scenario() {
    let mut store = store_at(&[1, 2, 3]);
    store.add("Dog walk", "saw a dog");
    let cat = store.add("My cat", "").id();
    let loud = store.add("Shouting", "THE CAT IS LOUD").id();

    store.set_search_text("cat");
    let mut found = ids(&store.derived_view());
    found.sort();
    assert_eq!(found, vec![cat, loud]);

    store.set_search_text("CAT");
    assert_eq!(store.derived_view().len(), 2);

    store.set_search_text("");
    assert_eq!(store.derived_view().len(), 3);
}

#[test]
fn test_view_is_recomputed_after_mutations() {
    let mut store = store_at(&[10, 20]);
    let first = store.add("Tea time", "").id();
    store.set_search_text("tea");
    assert_eq!(ids(&store.derived_view()), vec![first]);

    let second = store.add("Morning", "green tea").id();
    assert_eq!(ids(&store.derived_view()), vec![second, first]);

    store.update(first, "Coffee", "").unwrap();
    assert_eq!(ids(&store.derived_view()), vec![second]);
}

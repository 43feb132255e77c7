//! Coordinator Scenario Tests
//!
//! Drives full add/edit/update/delete flows against an in-memory surface.

use super::*;
use crate::model::Item;
use crate::view::{FormMode, ItemView, MemoryView};

fn setup() -> Coordinator<MemoryView> {
    let mut app = Coordinator::new(ItemStore::new(), MemoryView::new());
    app.init().expect("init failed");
    app
}

fn add(app: &mut Coordinator<MemoryView>, name: &str, calories: &str) -> Option<ItemId> {
    app.view_mut().set_input(name, calories);
    app.add_submit().expect("add failed")
}

fn assert_view_matches_store(app: &Coordinator<MemoryView>) {
    let rows = app.view().displayed_rows().unwrap();
    let items = app.store().list_items();
    assert_eq!(rows.len(), items.len());
    for (row, item) in rows.iter().zip(items) {
        assert_eq!(row.id, item.id);
        assert_eq!(row.name, item.name);
        assert_eq!(row.calories_text, item.calories.to_string());
    }
    assert_eq!(app.view().total_text(), app.store().total_calories().to_string());
}

#[test]
fn test_init_empty_hides_list() {
    let app = setup();
    assert!(!app.view().is_list_visible());
    assert_eq!(app.view().mode(), FormMode::Add);
    assert_eq!(app.view().total_text(), "0");
}

#[test]
fn test_init_renders_seeded_items() {
    let store = ItemStore::with_items(vec![
        Item::new(0, "Steak Dinner", 1200),
        Item::new(1, "Cookie", 400),
        Item::new(2, "Eggs", 300),
    ])
    .unwrap();
    let mut app = Coordinator::new(store, MemoryView::new());
    app.init().unwrap();

    assert!(app.view().is_list_visible());
    assert_eq!(app.view().total_text(), "1900");
    assert_view_matches_store(&app);
}

#[test]
fn test_full_session() {
    let mut app = setup();

    assert_eq!(add(&mut app, "Steak Dinner", "1200"), Some(0));
    assert_eq!(app.store().list_items(), &[Item::new(0, "Steak Dinner", 1200)]);
    assert_eq!(app.view().total_text(), "1200");
    assert!(app.view().is_list_visible());
    assert_eq!(app.view().read_input().unwrap(), crate::model::ItemInput::default());

    assert_eq!(add(&mut app, "Cookie", "400"), Some(1));
    assert_eq!(app.view().total_text(), "1600");

    app.edit_click("item-0").unwrap();
    assert_eq!(app.view().mode(), FormMode::Edit);
    assert_eq!(app.view().read_input().unwrap().name, "Steak Dinner");

    app.view_mut().set_input("Steak", "1300");
    assert_eq!(app.update_submit().unwrap(), 0);
    assert_eq!(app.store().get_item_by_id(0), Some(&Item::new(0, "Steak", 1300)));
    assert_eq!(app.view().total_text(), "1700");
    assert_eq!(app.view().mode(), FormMode::Add);
    assert_view_matches_store(&app);

    app.edit_click("item-1").unwrap();
    assert_eq!(app.delete_submit().unwrap(), 1);
    assert_eq!(app.store().list_items(), &[Item::new(0, "Steak", 1300)]);
    assert_eq!(app.view().total_text(), "1300");
    assert!(app.store().get_item_by_id(1).is_none());
    assert!(app.store().current_item().is_none());
    assert_view_matches_store(&app);
}

#[test]
fn test_add_with_empty_field_is_silent() {
    let mut app = setup();
    assert_eq!(add(&mut app, "", "100"), None);
    assert_eq!(add(&mut app, "Apple", ""), None);
    assert!(app.store().is_empty());
    assert_eq!(app.view().row_count(), 0);
}

#[test]
fn test_add_with_bad_calories_keeps_form() {
    let mut app = setup();
    app.view_mut().set_input("Apple", "a few");

    let err = app.add_submit().unwrap_err();
    assert!(err.is_input_error());
    assert!(app.store().is_empty());
    assert_eq!(app.view().read_input().unwrap().calories, "a few");
}

#[test]
fn test_update_without_selection() {
    let mut app = setup();
    add(&mut app, "Apple", "95");
    app.view_mut().set_input("Pear", "100");

    assert_eq!(
        app.update_submit().unwrap_err(),
        AppError::Store(StoreError::NoCurrentItem)
    );
    assert_eq!(app.store().list_items(), &[Item::new(0, "Apple", 95)]);
}

#[test]
fn test_delete_without_selection() {
    let mut app = setup();
    add(&mut app, "Apple", "95");

    assert_eq!(
        app.delete_submit().unwrap_err(),
        AppError::Store(StoreError::NoCurrentItem)
    );
    assert_eq!(app.view().row_count(), 1);
}

#[test]
fn test_delete_last_item_hides_list() {
    let mut app = setup();
    add(&mut app, "Apple", "95");
    app.edit_click("item-0").unwrap();
    app.delete_submit().unwrap();

    assert!(!app.view().is_list_visible());
    assert_eq!(app.view().total_text(), "0");
    assert_eq!(app.view().mode(), FormMode::Add);
}

#[test]
fn test_edit_click_bad_targets() {
    let mut app = setup();
    add(&mut app, "Apple", "95");

    assert_eq!(
        app.edit_click("item-list").unwrap_err(),
        AppError::InvalidRowId("item-list".to_string())
    );
    assert_eq!(
        app.edit_click("item-8").unwrap_err(),
        AppError::Store(StoreError::NotFound(8))
    );
    assert_eq!(app.view().mode(), FormMode::Add);
}

#[test]
fn test_cancel_leaves_store_alone() {
    let mut app = setup();
    add(&mut app, "Apple", "95");
    app.edit_click("item-0").unwrap();
    app.view_mut().set_input("Changed", "1");

    app.cancel().unwrap();
    assert_eq!(app.view().mode(), FormMode::Add);
    assert_eq!(app.store().list_items(), &[Item::new(0, "Apple", 95)]);
    assert_eq!(app.view().read_input().unwrap(), crate::model::ItemInput::default());
}

#[test]
fn test_names_with_markup_round_trip() {
    let mut app = setup();
    add(&mut app, "Fish & Chips <large>", "900");
    add(&mut app, "\"Diet\" Soda", "0");
    assert_view_matches_store(&app);
}

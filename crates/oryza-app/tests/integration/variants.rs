//! Integration tests for the catalogue: startup, add, view, delete.

use oryza_app::{Action, DeleteOutcome, NotificationKind, Screen};
use oryza_core::{EntityId, OrderForm, PLACEHOLDER_IMAGE, Quantity, VariantDraft};
use oryza_storage::{LocalStore, MemoryStore};

use crate::common::{ScriptedUi, fresh_app, reload};

fn draft(name: &str) -> VariantDraft {
    VariantDraft {
        name: name.to_string(),
        tag: "Sticky".to_string(),
        origin: "Laos".to_string(),
        image: None,
        description: "Glutinous rice".to_string(),
        harvest_days: Some(120),
        grain_type: Some("Short Grain".to_string()),
        ecosystem: Some("Upland".to_string()),
    }
}

#[test]
fn test_start_renders_defaults() {
    let mut app = fresh_app(ScriptedUi::new());
    app.start();

    let ui = app.ui();
    assert_eq!(ui.galleries.len(), 1);
    assert_eq!(ui.galleries[0].count_label, "3 Items");
    assert_eq!(ui.order_lists.len(), 1);
    assert!(ui.order_lists[0].rows().is_empty());
    assert_eq!(ui.contacts.len(), 1);
    assert_eq!(app.screen(), Screen::Gallery);
}

#[test]
fn test_add_variant_is_newest_first_and_persists() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_add_form();
    assert_eq!(app.screen(), Screen::AddVariant);

    let created = app.add_variant(draft("Khao Niew")).unwrap();

    assert_eq!(app.variants().len(), 4);
    assert_eq!(app.variants()[0], created);
    assert_eq!(created.image, PLACEHOLDER_IMAGE);
    assert_eq!(app.screen(), Screen::Gallery);
    assert_eq!(app.ui().messages(), ["Added Successfully"]);
    assert_eq!(app.ui().galleries.last().unwrap().count_label, "4 Items");

    let app = reload(app);
    assert_eq!(app.variants().len(), 4);
    assert_eq!(app.variants()[0], created);
}

#[test]
fn test_two_adds_in_a_row_get_distinct_ids() {
    let mut app = fresh_app(ScriptedUi::new());
    let a = app.add_variant(draft("A")).unwrap();
    let b = app.add_variant(draft("B")).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(app.variants()[0].name, "B");
    assert_eq!(app.variants()[1].name, "A");
}

#[test]
fn test_ids_stay_unique_after_reload() {
    let mut app = fresh_app(ScriptedUi::new());
    let first = app.add_variant(draft("A")).unwrap();
    let mut app = reload(app);
    let second = app.add_variant(draft("B")).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn test_open_view_modal_selects_variant() {
    let mut app = fresh_app(ScriptedUi::new());

    let name = app.open_view_modal(EntityId::new(2)).unwrap().name.clone();

    assert_eq!(name, "Royal Basmati");
    assert_eq!(app.screen(), Screen::Detail(EntityId::new(2)));
    assert_eq!(app.selection().unwrap().id, EntityId::new(2));
    assert_eq!(app.ui().details.len(), 1);
    assert_eq!(app.ui().details[0].origin, "India");
    assert_eq!(app.detail_view().unwrap().grain_type, "Extra Long");
}

#[test]
fn test_open_view_modal_unknown_id_is_silent() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(1));
    let before_screen = app.screen();

    assert!(app.open_view_modal(EntityId::new(999)).is_none());

    assert_eq!(app.screen(), before_screen);
    assert_eq!(app.selection().unwrap().name, "Thai Jasmine");
    assert_eq!(app.ui().details.len(), 1);
    assert!(app.ui().notifications.is_empty());
}

#[test]
fn test_delete_variant_confirmed() {
    let mut app = fresh_app(ScriptedUi::new());

    let outcome = app.delete_variant(EntityId::new(1)).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted { removed: 1 });
    assert_eq!(app.ui().asked, ["Delete this variant?"]);
    assert_eq!(app.ui().messages(), ["Deleted"]);
    assert_eq!(app.ui().galleries.last().unwrap().count_label, "2 Items");

    let app = reload(app);
    assert_eq!(app.variants().len(), 2);
}

#[test]
fn test_delete_variant_declined() {
    let mut app = fresh_app(ScriptedUi::new().with_confirms(&[false]));

    let outcome = app.delete_variant(EntityId::new(1)).unwrap();

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(app.variants().len(), 3);
    assert!(app.ui().notifications.is_empty());
    assert!(app.ui().galleries.is_empty());
    assert!(app.store().inner().is_empty());
}

#[test]
fn test_delete_unknown_variant_leaves_collection() {
    let mut app = fresh_app(ScriptedUi::new());
    let before = app.variants().to_vec();

    let outcome = app.delete_variant(EntityId::new(12345)).unwrap();

    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(app.variants(), before.as_slice());
    assert!(app.ui().notifications.is_empty());
}

#[test]
fn test_delete_all_variants_empties_gallery_and_keeps_orders() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(3));
    app.place_order(OrderForm::new(Quantity::Count(2), "Lucia", "Milan"))
        .unwrap();

    for id in [1, 2, 3] {
        app.delete_variant(EntityId::new(id)).unwrap();
    }

    assert!(app.variants().is_empty());
    let gallery = app.gallery_view();
    assert_eq!(gallery.count_label, "0 Items");
    assert!(gallery.cards.is_empty());
    assert_eq!(app.orders().len(), 1);
    assert_eq!(app.orders()[0].item, "Arborio");

    let app = reload(app);
    assert!(app.variants().is_empty());
    assert_eq!(app.orders().len(), 1);
}

#[test]
fn test_dispatch_card_actions() {
    let mut app = fresh_app(ScriptedUi::new());
    let card = app.gallery_view().cards[1].clone();

    app.dispatch(card.actions[0]).unwrap();
    assert_eq!(app.screen(), Screen::Detail(card.id));

    app.dispatch(card.actions[1]).unwrap();
    assert!(app.variants().iter().all(|v| v.id != card.id));
}

#[test]
fn test_dispatch_unknown_view_is_noop() {
    let mut app = fresh_app(ScriptedUi::new());
    app.dispatch(Action::ViewVariant(EntityId::new(77))).unwrap();
    assert_eq!(app.screen(), Screen::Gallery);
    assert!(app.selection().is_none());
}

#[test]
fn test_corrupt_variants_fall_back_to_defaults() {
    let store = LocalStore::new(MemoryStore::with_entries([("variants", "[{broken")]));
    let app = oryza_app::App::load(store, ScriptedUi::new(), oryza_app::AppOptions::default())
        .unwrap();
    assert_eq!(app.variants().len(), 3);
    assert!(
        app.ui()
            .notifications
            .iter()
            .all(|n| n.kind != NotificationKind::Failure)
    );
}

#[test]
fn test_legacy_records_without_optional_fields_load() {
    let legacy = r#"[{"id": 1700000000000, "name": "Old Red", "tag": "Heirloom",
                      "origin": "Bhutan", "image": "x", "desc": "Nutty"}]"#;
    let store = LocalStore::new(MemoryStore::with_entries([("variants", legacy)]));
    let mut app =
        oryza_app::App::load(store, ScriptedUi::new(), oryza_app::AppOptions::default()).unwrap();

    assert_eq!(app.gallery_view().cards[0].harvest, "— Days");
    let detail = app.open_view_modal(EntityId::new(1_700_000_000_000)).unwrap();
    assert_eq!(detail.grain_type, None);
}

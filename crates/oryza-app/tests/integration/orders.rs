//! Integration tests for the order placement flow.

use oryza_app::{DeleteOutcome, Error, OrdersView, Screen};
use oryza_core::{EntityId, OrderForm, Quantity};

use crate::common::{ScriptedUi, fresh_app, reload};

fn form(qty: Quantity) -> OrderForm {
    OrderForm::new(qty, "Somchai", "Chiang Mai")
}

#[test]
fn test_full_order_flow() {
    let mut app = fresh_app(ScriptedUi::new());

    app.open_view_modal(EntityId::new(1));
    assert_eq!(app.screen(), Screen::Detail(EntityId::new(1)));

    app.open_order_form().unwrap();
    assert_eq!(app.screen(), Screen::Ordering(EntityId::new(1)));

    let order = app.place_order(form(Quantity::Count(5))).unwrap();

    assert_eq!(app.screen(), Screen::Gallery);
    assert_eq!(app.orders().len(), 1);
    assert_eq!(order.item, "Thai Jasmine");
    assert_eq!(order.qty, Quantity::Count(5));
    assert!(!order.date.is_empty());
    assert_eq!(app.ui().messages(), ["Order Placed"]);

    let rendered = app.ui().order_lists.last().unwrap();
    assert_eq!(rendered.rows().len(), 1);
    assert_eq!(rendered.rows()[0].item, "Thai Jasmine");
}

#[test]
fn test_order_survives_reload() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(1));
    let order = app.place_order(form(Quantity::Count(5))).unwrap();

    let app = reload(app);

    assert_eq!(app.orders(), [order]);
}

#[test]
fn test_order_without_selection_is_rejected() {
    let mut app = fresh_app(ScriptedUi::new());

    assert!(matches!(app.open_order_form(), Err(Error::NoSelection)));
    assert!(matches!(
        app.place_order(form(Quantity::Count(1))),
        Err(Error::NoSelection)
    ));
    assert!(app.orders().is_empty());
    assert!(app.store().inner().is_empty());
}

#[test]
fn test_unvalidated_fields_are_kept() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(2));

    let order = app
        .place_order(OrderForm::new(Quantity::parse("a sack"), "", ""))
        .unwrap();

    assert_eq!(order.qty, Quantity::Raw("a sack".to_string()));
    assert_eq!(order.customer, "");
    let app = reload(app);
    assert_eq!(app.orders()[0].qty.to_string(), "a sack");
}

#[test]
fn test_orders_newest_first() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(1));
    app.place_order(form(Quantity::Count(1))).unwrap();
    app.open_view_modal(EntityId::new(3));
    app.place_order(form(Quantity::Count(2))).unwrap();

    let items: Vec<&str> = app.orders().iter().map(|o| o.item.as_str()).collect();
    assert_eq!(items, ["Arborio", "Thai Jasmine"]);
}

#[test]
fn test_selection_survives_closing_panels() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(2));
    app.close_all_modals();

    assert_eq!(app.screen(), Screen::Gallery);
    app.open_order_form().unwrap();
    assert_eq!(app.screen(), Screen::Ordering(EntityId::new(2)));
}

#[test]
fn test_order_item_is_a_snapshot() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(2));
    app.place_order(form(Quantity::Count(3))).unwrap();

    app.delete_variant(EntityId::new(2)).unwrap();

    assert_eq!(app.orders()[0].item, "Royal Basmati");
}

#[test]
fn test_delete_order() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(1));
    let order = app.place_order(form(Quantity::Count(1))).unwrap();

    let outcome = app.delete_order(order.id).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted { removed: 1 });
    assert_eq!(app.ui().asked, ["Delete this order?"]);
    assert!(matches!(
        app.ui().order_lists.last().unwrap(),
        OrdersView::Empty { .. }
    ));
    assert_eq!(app.variants().len(), 3);

    let app = reload(app);
    assert!(app.orders().is_empty());
}

#[test]
fn test_delete_order_declined() {
    let mut app = fresh_app(ScriptedUi::new().with_confirms(&[false]));
    app.open_view_modal(EntityId::new(1));
    let order = app.place_order(form(Quantity::Count(1))).unwrap();

    assert_eq!(app.delete_order(order.id).unwrap(), DeleteOutcome::Cancelled);
    assert_eq!(app.orders().len(), 1);
}

#[test]
fn test_dispatch_order_row_delete() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_view_modal(EntityId::new(1));
    app.place_order(form(Quantity::Count(1))).unwrap();

    let action = app.orders_view().rows()[0].action;
    app.dispatch(action).unwrap();

    assert!(app.orders().is_empty());
}

#[test]
fn test_custom_date_format() {
    let (store, ui) = fresh_app(ScriptedUi::new()).into_parts();
    let options = oryza_app::AppOptions::default().with_date_format("%d.%m.%Y");
    let mut app = oryza_app::App::load(store, ui, options).unwrap();

    app.open_view_modal(EntityId::new(1));
    let order = app.place_order(form(Quantity::Count(1))).unwrap();
    assert_eq!(order.date.matches('.').count(), 2);
}

#[test]
fn test_invalid_date_format_rejected_at_load() {
    let (store, ui) = fresh_app(ScriptedUi::new()).into_parts();
    let options = oryza_app::AppOptions::default().with_date_format("%Q");
    assert!(matches!(
        oryza_app::App::load(store, ui, options),
        Err(Error::Config { .. })
    ));
}

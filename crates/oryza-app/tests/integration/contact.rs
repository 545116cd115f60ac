//! Integration tests for contact settings and the contact form.

use oryza_app::{AppOptions, Screen};
use oryza_core::ContactInfo;

use crate::common::{ScriptedUi, fresh_app, reload};

#[test]
fn test_edit_contact_phone_only() {
    let mut app = fresh_app(ScriptedUi::new().with_prompts(&[Some("123"), Some("")]));
    let address_before = app.contact().address.clone();

    let info = app.edit_contact().unwrap();

    assert_eq!(info.phone, "123");
    assert_eq!(info.address, address_before);
    assert_eq!(app.ui().contacts.last().unwrap().phone, "123");

    let app = reload(app);
    assert_eq!(app.contact().phone, "123");
    assert_eq!(app.contact().address, address_before);
}

#[test]
fn test_edit_contact_prompts_with_current_values() {
    let mut app = fresh_app(ScriptedUi::new());
    let current = app.contact().clone();

    app.edit_contact().unwrap();

    assert_eq!(
        app.ui().prompted,
        vec![
            ("New Phone:".to_string(), current.phone.clone()),
            ("New Address:".to_string(), current.address.clone()),
        ]
    );
}

#[test]
fn test_edit_contact_cancelled_changes_nothing() {
    let mut app = fresh_app(ScriptedUi::new().with_prompts(&[None, None]));
    let before = app.contact().clone();

    let info = app.edit_contact().unwrap();

    assert_eq!(info, before);
    assert!(app.store().inner().is_empty());
}

#[test]
fn test_edit_contact_both_fields() {
    let mut app = fresh_app(ScriptedUi::new().with_prompts(&[Some("555"), Some("1 Rice Rd")]));
    app.edit_contact().unwrap();

    let app = reload(app);
    assert_eq!(app.contact(), &ContactInfo::new("555", "1 Rice Rd"));
}

#[test]
fn test_configured_default_contact() {
    let (store, ui) = fresh_app(ScriptedUi::new()).into_parts();
    let options = AppOptions::default().with_default_contact(ContactInfo::new("0", "Farm"));
    let app = oryza_app::App::load(store, ui, options).unwrap();
    assert_eq!(app.contact(), &ContactInfo::new("0", "Farm"));
}

#[test]
fn test_update_contact_without_prompts() {
    let mut app = fresh_app(ScriptedUi::new());
    let info = app.update_contact(None, Some("Harbour St")).unwrap();
    assert_eq!(info.address, "Harbour St");
    assert!(app.ui().prompted.is_empty());
}

#[test]
fn test_send_message() {
    let mut app = fresh_app(ScriptedUi::new());
    app.open_contact();
    assert_eq!(app.screen(), Screen::Contact);

    app.send_message("Do you ship to Penang?");

    assert_eq!(app.screen(), Screen::Gallery);
    assert_eq!(app.ui().messages(), ["Message Sent"]);
    assert!(app.store().inner().is_empty());
}

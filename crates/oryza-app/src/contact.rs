//! Contact phone and address settings.

use oryza_core::ContactInfo;
use oryza_storage::{KeyValueStore, LocalStore};

use crate::Result;

/// Store key for the phone number.
pub const PHONE_KEY: &str = "phone";

/// Store key for the postal address.
pub const ADDRESS_KEY: &str = "address";

/// Which fields an update actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactChange {
    /// Phone was replaced
    pub phone: bool,
    /// Address was replaced
    pub address: bool,
}

impl ContactChange {
    /// Returns `true` when neither field changed.
    pub fn is_empty(&self) -> bool {
        !self.phone && !self.address
    }
}

/// Displayed contact details, persisted as two independent plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    info: ContactInfo,
}

impl ContactSettings {
    /// Overlays persisted values onto `defaults`.
    ///
    /// A missing or empty stored value keeps the default.
    pub fn load<S: KeyValueStore>(store: &LocalStore<S>, defaults: ContactInfo) -> Result<Self> {
        let mut info = defaults;
        if let Some(phone) = store.get_text(PHONE_KEY)?.filter(|p| !p.is_empty()) {
            info.phone = phone;
        }
        if let Some(address) = store.get_text(ADDRESS_KEY)?.filter(|a| !a.is_empty()) {
            info.address = address;
        }
        Ok(Self { info })
    }

    /// Current contact details.
    pub fn info(&self) -> &ContactInfo {
        &self.info
    }

    /// Replaces each field whose new value is present and non-empty.
    ///
    /// Fields are written one after the other; they are never checked
    /// against each other.
    pub fn update<S: KeyValueStore>(
        &mut self,
        store: &mut LocalStore<S>,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<ContactChange> {
        let mut change = ContactChange::default();

        if let Some(phone) = phone.filter(|p| !p.is_empty()) {
            store.set_text(PHONE_KEY, phone)?;
            self.info.phone = phone.to_string();
            change.phone = true;
        }
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            store.set_text(ADDRESS_KEY, address)?;
            self.info.address = address.to_string();
            change.address = true;
        }

        if !change.is_empty() {
            tracing::info!(phone = change.phone, address = change.address, "Contact updated");
        }
        Ok(change)
    }
}

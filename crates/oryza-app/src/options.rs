//! Controller options.

use chrono::format::{Item, StrftimeItems};

use oryza_core::ContactInfo;

use crate::{Error, Result};

/// Date format used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Tunables for [`App`](crate::App).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// chrono format string for order dates
    pub date_format: String,
    /// Contact details shown until the owner saves their own
    pub default_contact: ContactInfo,
}

impl AppOptions {
    /// Sets the order date format.
    pub fn with_date_format<S: Into<String>>(mut self, format: S) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets the placeholder contact details.
    pub fn with_default_contact(mut self, contact: ContactInfo) -> Self {
        self.default_contact = contact;
        self
    }

    /// Checks that the date format is a valid chrono format string.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::config(format!(
                "invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Formats the current local date for a new order.
    pub(crate) fn format_today(&self) -> String {
        let format = if self.validate().is_ok() {
            self.date_format.as_str()
        } else {
            DEFAULT_DATE_FORMAT
        };
        chrono::Local::now().format(format).to_string()
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            default_contact: ContactInfo::default(),
        }
    }
}

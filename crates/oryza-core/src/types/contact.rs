//! Shop contact details.

use serde::{Deserialize, Serialize};

/// Phone number shown until the owner sets one.
pub const DEFAULT_PHONE: &str = "+66 2 555 0199";

/// Address shown until the owner sets one.
pub const DEFAULT_ADDRESS: &str = "88 Paddy Field Road, Suphan Buri, Thailand";

/// Phone and address, each persisted under its own key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

impl ContactInfo {
    /// Creates contact info from explicit values.
    pub fn new<P, A>(phone: P, address: A) -> Self
    where
        P: Into<String>,
        A: Into<String>,
    {
        Self {
            phone: phone.into(),
            address: address.into(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE, DEFAULT_ADDRESS)
    }
}

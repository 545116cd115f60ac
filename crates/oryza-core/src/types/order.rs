//! Customer orders.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Entity, EntityId};

/// A customer request for a variant, frozen at the time it was placed.
///
/// `item` is a copy of the variant's name, not a reference to it: deleting
/// or renaming the variant later has no effect on existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique id within the order book
    pub id: EntityId,

    /// Variant name at order time
    #[serde(default)]
    pub item: String,

    /// Requested quantity, unvalidated
    #[serde(default)]
    pub qty: Quantity,

    /// Customer name
    #[serde(default)]
    pub customer: String,

    /// Delivery location
    #[serde(default)]
    pub location: String,

    /// Date string formatted when the order was placed
    #[serde(default)]
    pub date: String,
}

impl Entity for Order {
    const STORE_KEY: &'static str = "orders";
    const KIND: &'static str = "order";

    type Draft = OrderDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: OrderDraft) -> Self {
        Self {
            id,
            item: draft.item,
            qty: draft.form.qty,
            customer: draft.form.customer,
            location: draft.form.location,
            date: draft.date,
        }
    }
}

/// Fields entered on the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    /// Quantity as typed
    pub qty: Quantity,
    /// Customer name
    pub customer: String,
    /// Delivery location
    pub location: String,
}

impl OrderForm {
    /// Creates a form from raw field values.
    pub fn new<C, L>(qty: Quantity, customer: C, location: L) -> Self
    where
        C: Into<String>,
        L: Into<String>,
    {
        Self {
            qty,
            customer: customer.into(),
            location: location.into(),
        }
    }
}

/// Everything needed to create an [`Order`] besides its id.
///
/// The controller fills `item` from the current selection and `date` from
/// the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Variant name being ordered
    pub item: String,
    /// Submitted form
    pub form: OrderForm,
    /// Formatted placement date
    pub date: String,
}

/// An order quantity.
///
/// The form performs no validation, so anything that is not a plain
/// non-negative integer is kept verbatim.
///
/// Stored strings are re-read through [`Quantity::parse`], so `"5"` loads as
/// `Count(5)`. Other numbers keep their text; any other JSON reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "StoredQuantity")]
pub enum Quantity {
    /// A whole number of units
    Count(u64),
    /// Free text exactly as entered
    Raw(String),
}

impl Quantity {
    /// Interprets user input, preferring a count when it parses as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use oryza_core::Quantity;
    ///
    /// assert_eq!(Quantity::parse("5"), Quantity::Count(5));
    /// assert_eq!(Quantity::parse("a sack"), Quantity::Raw("a sack".into()));
    /// ```
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<u64>() {
            Ok(n) => Quantity::Count(n),
            Err(_) => Quantity::Raw(input.to_string()),
        }
    }

    /// Returns the count when the quantity is numeric.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Quantity::Count(n) => Some(*n),
            Quantity::Raw(_) => None,
        }
    }
}

/// Every JSON shape a stored `qty` may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredQuantity {
    Count(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl From<StoredQuantity> for Quantity {
    fn from(stored: StoredQuantity) -> Self {
        match stored {
            StoredQuantity::Count(n) => Quantity::Count(n),
            StoredQuantity::Signed(n) => Quantity::Raw(n.to_string()),
            StoredQuantity::Float(n) => Quantity::Raw(n.to_string()),
            StoredQuantity::Text(text) => Quantity::parse(&text),
            StoredQuantity::Other(_) => Quantity::default(),
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Raw(String::new())
    }
}

impl From<u64> for Quantity {
    fn from(n: u64) -> Self {
        Quantity::Count(n)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::Raw(s) => write!(f, "{s}"),
        }
    }
}

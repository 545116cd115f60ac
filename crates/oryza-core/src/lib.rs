#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Oryza Core
//!
//! Domain types shared by every Oryza crate: catalogue variants, orders,
//! contact details, entity ids and the id sequence that issues them.
//! This crate has no internal Oryza dependencies.

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{
    ContactInfo, DEFAULT_ADDRESS, DEFAULT_PHONE, Entity, EntityId, IdSequence, Order, OrderDraft,
    OrderForm, PLACEHOLDER_IMAGE, Quantity, Variant, VariantDraft, default_variants,
};

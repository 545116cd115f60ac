//! Core types for the Oryza catalogue.

mod contact;
mod entity;
mod ids;
mod order;
mod proptests;
mod variant;

pub use contact::{ContactInfo, DEFAULT_ADDRESS, DEFAULT_PHONE};
pub use entity::Entity;
pub use ids::{EntityId, IdSequence};
pub use order::{Order, OrderDraft, OrderForm, Quantity};
pub use variant::{PLACEHOLDER_IMAGE, Variant, VariantDraft, default_variants};

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Oryza App
//!
//! Everything between the store and the screen: persisted repositories for
//! variants and orders, contact settings, view projections, and the
//! [`App`] controller that ties user actions to mutations and re-renders.
//!
//! User interaction is injected through the [`Ui`] capability traits, so
//! the controller runs unchanged under a terminal front end or a scripted
//! test double.

pub mod app;
pub mod contact;
pub mod error;
pub mod options;
pub mod repository;
pub mod screen;
pub mod ui;
pub mod views;

// Re-exports for convenience
pub use app::App;
pub use contact::{ContactChange, ContactSettings};
pub use error::{Error, Result};
pub use options::AppOptions;
pub use repository::{DeleteOutcome, Repository};
pub use screen::Screen;
pub use ui::{Dialog, Notification, NotificationKind, Notifier, Renderer, Ui};
pub use views::{Action, Card, ContactView, DetailView, GalleryView, OrderRow, OrdersView};

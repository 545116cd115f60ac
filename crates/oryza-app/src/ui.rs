//! Capabilities the controller needs from a front end.
//!
//! A front end provides blocking dialogs, transient notifications and a
//! surface to draw views on. Bundling them as [`Ui`] keeps the controller
//! free of any terminal or test specifics.

use std::fmt;

use crate::views::{ContactView, DetailView, GalleryView, OrdersView};

/// Confirmation and text-input dialogs.
pub trait Dialog {
    /// Asks a yes/no question; `false` aborts the pending action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Asks for a line of text, offering `current` as the starting value.
    ///
    /// `None` means the dialog was cancelled.
    fn prompt(&mut self, message: &str, current: &str) -> Option<String>;
}

/// Outcome category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action completed
    Success,
    /// The action failed and state is unchanged
    Failure,
}

/// A short, transient message about the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Success or failure
    pub kind: NotificationKind,
    /// Text shown to the user
    pub message: String,
}

impl Notification {
    /// A success notification.
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// A failure notification.
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Receives transient notifications.
pub trait Notifier {
    /// Shows `notification`.
    fn notify(&mut self, notification: Notification);
}

/// Draws view projections.
///
/// Every method replaces whatever the previous call of the same kind drew.
pub trait Renderer {
    /// Redraws the card gallery.
    fn render_gallery(&mut self, view: &GalleryView);

    /// Shows the detail panel for one variant.
    fn render_detail(&mut self, view: &DetailView);

    /// Redraws the order list.
    fn render_orders(&mut self, view: &OrdersView);

    /// Redraws the contact panel.
    fn render_contact(&mut self, view: &ContactView);
}

/// Everything the controller needs from a front end.
pub trait Ui: Dialog + Notifier + Renderer {}

impl<T: Dialog + Notifier + Renderer> Ui for T {}

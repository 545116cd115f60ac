//! Which panel is in front.

use std::fmt;

use oryza_core::EntityId;

/// The visible panel.
///
/// Ordering always happens in the context of the variant whose detail
/// panel was opened first:
/// `Gallery → Detail(id) → Ordering(id) → Gallery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Card gallery, no panel open
    #[default]
    Gallery,
    /// Detail panel for a variant
    Detail(EntityId),
    /// Order form for the selected variant
    Ordering(EntityId),
    /// Add-variant form
    AddVariant,
    /// Contact panel
    Contact,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Gallery => write!(f, "gallery"),
            Screen::Detail(id) => write!(f, "detail({id})"),
            Screen::Ordering(id) => write!(f, "ordering({id})"),
            Screen::AddVariant => write!(f, "add_variant"),
            Screen::Contact => write!(f, "contact"),
        }
    }
}

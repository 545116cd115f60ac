//! View projections of application state.
//!
//! Views are derived data: they are rebuilt from the repositories on every
//! render and never written back. Affordances (view, delete) are carried
//! as [`Action`] values keyed by entity id, which a front end hands back to
//! [`App::dispatch`](crate::App::dispatch).

use serde::Serialize;
use std::fmt;

use oryza_core::{ContactInfo, EntityId, Order, Variant};

/// Shown in the order list when there are no orders.
pub const NO_ORDERS_PLACEHOLDER: &str = "No orders yet.";

/// A user affordance attached to a card or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum Action {
    /// Open the variant's detail panel
    ViewVariant(EntityId),
    /// Delete the variant (after confirmation)
    DeleteVariant(EntityId),
    /// Delete the order (after confirmation)
    DeleteOrder(EntityId),
}

/// One gallery card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Variant id
    pub id: EntityId,
    /// Card image
    pub image: String,
    /// Tag badge
    pub tag: String,
    /// Variant name
    pub name: String,
    /// Harvest label, e.g. "115 Days"
    pub harvest: String,
    /// View and delete affordances
    pub actions: Vec<Action>,
}

/// The card gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    /// Item-count label, e.g. "3 Items"
    pub count_label: String,
    /// Cards in collection order
    pub cards: Vec<Card>,
}

impl GalleryView {
    /// Builds the gallery for `variants`, preserving their order.
    pub fn build(variants: &[Variant]) -> Self {
        let cards = variants
            .iter()
            .map(|v| Card {
                id: v.id,
                image: v.image.clone(),
                tag: v.tag.clone(),
                name: v.name.clone(),
                harvest: v.harvest_label(),
                actions: vec![Action::ViewVariant(v.id), Action::DeleteVariant(v.id)],
            })
            .collect();
        Self {
            count_label: format!("{} Items", variants.len()),
            cards,
        }
    }
}

impl fmt::Display for GalleryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.count_label)?;
        for card in &self.cards {
            writeln!(
                f,
                "  [{}] {} · {} · {}",
                card.id, card.name, card.tag, card.harvest
            )?;
        }
        Ok(())
    }
}

/// The detail panel for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Variant id
    pub id: EntityId,
    /// Image
    pub image: String,
    /// Tag
    pub tag: String,
    /// Name
    pub name: String,
    /// Origin
    pub origin: String,
    /// Description
    pub description: String,
    /// Harvest label
    pub harvest: String,
    /// Grain type, empty when unknown
    pub grain_type: String,
    /// Ecosystem, empty when unknown
    pub ecosystem: String,
}

impl DetailView {
    /// Builds the detail panel for `variant`.
    pub fn build(variant: &Variant) -> Self {
        Self {
            id: variant.id,
            image: variant.image.clone(),
            tag: variant.tag.clone(),
            name: variant.name.clone(),
            origin: variant.origin.clone(),
            description: variant.description.clone(),
            harvest: variant.harvest_label(),
            grain_type: variant.grain_type.clone().unwrap_or_default(),
            ecosystem: variant.ecosystem.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.name, self.tag)?;
        writeln!(f, "  Id:        {}", self.id)?;
        writeln!(f, "  Origin:    {}", self.origin)?;
        writeln!(f, "  Harvest:   {}", self.harvest)?;
        writeln!(f, "  Grain:     {}", or_dash(&self.grain_type))?;
        writeln!(f, "  Ecosystem: {}", or_dash(&self.ecosystem))?;
        writeln!(f, "  Image:     {}", self.image)?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "  {}", self.description)?;
        }
        Ok(())
    }
}

/// One row of the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    /// Order id
    pub id: EntityId,
    /// Variant name at order time
    pub item: String,
    /// Quantity as entered
    pub qty: String,
    /// Customer
    pub customer: String,
    /// Delivery location
    pub location: String,
    /// Placement date
    pub date: String,
    /// Delete affordance
    pub action: Action,
}

/// The order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OrdersView {
    /// No orders; show the placeholder message
    Empty {
        /// Placeholder text
        placeholder: String,
    },
    /// One row per order, in collection order
    Rows {
        /// Order rows
        rows: Vec<OrderRow>,
    },
}

impl OrdersView {
    /// Builds the order list for `orders`.
    pub fn build(orders: &[Order]) -> Self {
        if orders.is_empty() {
            return OrdersView::Empty {
                placeholder: NO_ORDERS_PLACEHOLDER.to_string(),
            };
        }
        let rows = orders
            .iter()
            .map(|o| OrderRow {
                id: o.id,
                item: o.item.clone(),
                qty: o.qty.to_string(),
                customer: o.customer.clone(),
                location: o.location.clone(),
                date: o.date.clone(),
                action: Action::DeleteOrder(o.id),
            })
            .collect();
        OrdersView::Rows { rows }
    }

    /// Rows, empty for the placeholder state.
    pub fn rows(&self) -> &[OrderRow] {
        match self {
            OrdersView::Empty { .. } => &[],
            OrdersView::Rows { rows } => rows,
        }
    }
}

impl fmt::Display for OrdersView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrdersView::Empty { placeholder } => writeln!(f, "{placeholder}"),
            OrdersView::Rows { rows } => {
                for row in rows {
                    writeln!(
                        f,
                        "  [{}] {} x{} · {} · {} · {}",
                        row.id, row.item, row.qty, row.customer, row.location, row.date
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// The contact panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    /// Phone
    pub phone: String,
    /// Address
    pub address: String,
}

impl ContactView {
    /// Builds the contact panel.
    pub fn build(info: &ContactInfo) -> Self {
        Self {
            phone: info.phone.clone(),
            address: info.address.clone(),
        }
    }
}

impl fmt::Display for ContactView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Phone:   {}", self.phone)?;
        writeln!(f, "Address: {}", self.address)
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "—" } else { value }
}

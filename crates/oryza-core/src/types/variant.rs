//! Catalogue variants.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Entity, EntityId};

/// Image used when a variant is added without one.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1586201375761-83865001e31c?q=80&w=600";

/// A catalogue entry describing one rice type.
///
/// `harvest_days`, `grain_type` and `ecosystem` were added after the first
/// records were written, so they are optional and absent values read as
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique id within the catalogue
    pub id: EntityId,

    /// Display name, e.g. "Thai Jasmine"
    #[serde(default)]
    pub name: String,

    /// Short label shown on the card
    #[serde(default)]
    pub tag: String,

    /// Country or region of origin
    #[serde(default)]
    pub origin: String,

    /// Image URL or embedded data URL
    #[serde(default)]
    pub image: String,

    /// Free-form description
    #[serde(default, rename = "desc", alias = "description")]
    pub description: String,

    /// Days from planting to harvest
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_days"
    )]
    pub harvest_days: Option<u32>,

    /// Grain classification, e.g. "Long Grain"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_type: Option<String>,

    /// Growing ecosystem, e.g. "Irrigated"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<String>,
}

impl Variant {
    /// Card label for the harvest period, e.g. "115 Days".
    pub fn harvest_label(&self) -> String {
        match self.harvest_days {
            Some(days) => format!("{days} Days"),
            None => "— Days".to_string(),
        }
    }
}

impl Entity for Variant {
    const STORE_KEY: &'static str = "variants";
    const KIND: &'static str = "variant";

    type Draft = VariantDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: VariantDraft) -> Self {
        let image = draft
            .image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        Self {
            id,
            name: draft.name,
            tag: draft.tag,
            origin: draft.origin,
            image,
            description: draft.description,
            harvest_days: draft.harvest_days,
            grain_type: draft.grain_type,
            ecosystem: draft.ecosystem,
        }
    }

    fn defaults() -> Vec<Self> {
        default_variants()
    }
}

/// Fields submitted by the add-variant form.
///
/// Nothing is validated; empty strings are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantDraft {
    /// Display name
    pub name: String,
    /// Card tag
    pub tag: String,
    /// Origin
    pub origin: String,
    /// Image URL; `None` or blank falls back to [`PLACEHOLDER_IMAGE`]
    pub image: Option<String>,
    /// Description
    pub description: String,
    /// Harvest period in days
    pub harvest_days: Option<u32>,
    /// Grain classification
    pub grain_type: Option<String>,
    /// Growing ecosystem
    pub ecosystem: Option<String>,
}

impl VariantDraft {
    /// Creates a draft with only a name set.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The built-in catalogue shown before anything has been saved.
pub fn default_variants() -> Vec<Variant> {
    vec![
        Variant {
            id: EntityId::new(1),
            name: "Thai Jasmine".to_string(),
            tag: "Fragrant".to_string(),
            origin: "Thailand".to_string(),
            image: "https://images.unsplash.com/photo-1596791242301-447a064010ce?q=80&w=600"
                .to_string(),
            description: "Famous for its floral aroma and soft texture. It requires sufficient \
                          water and is best grown in wet seasons."
                .to_string(),
            harvest_days: Some(115),
            grain_type: Some("Long Grain".to_string()),
            ecosystem: Some("Irrigated".to_string()),
        },
        Variant {
            id: EntityId::new(2),
            name: "Royal Basmati".to_string(),
            tag: "Aromatic".to_string(),
            origin: "India".to_string(),
            image: "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?q=80&w=600"
                .to_string(),
            description: "Long slender grains with a nutty flavor. Known for elongating almost \
                          twice its length upon cooking."
                .to_string(),
            harvest_days: Some(130),
            grain_type: Some("Extra Long".to_string()),
            ecosystem: Some("Rainfed".to_string()),
        },
        Variant {
            id: EntityId::new(3),
            name: "Arborio".to_string(),
            tag: "Creamy".to_string(),
            origin: "Italy".to_string(),
            image: "https://images.unsplash.com/photo-1605626279934-2e2d09337060?q=80&w=600"
                .to_string(),
            description: "Short-grain rice with high starch content, making it the perfect \
                          choice for creamy Risotto dishes."
                .to_string(),
            harvest_days: Some(160),
            grain_type: Some("Short Grain".to_string()),
            ecosystem: Some("Upland".to_string()),
        },
    ]
}

// Older forms stored the day count as a string ("115"); anything that is
// not a non-negative integer reads as unknown.
fn lenient_days<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

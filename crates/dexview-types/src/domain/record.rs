use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Image shown when a record carries no artwork at all.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/96x96?text=Pokemon";

/// Highest base value an attribute can reach; used to scale stat bars.
pub const MAX_ATTRIBUTE_VALUE: u32 = 255;

/// Minimal listing entry returned by a list page.
///
/// `reference` is an opaque locator (absolute URL or bare id) that the
/// detail fetcher resolves into a full [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordSummary {
    pub name: String,
    pub reference: String,
}

impl RecordSummary {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// Fully detailed catalog entry, identified by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    /// Ordered stat list
    pub attributes: Vec<Attribute>,
    /// Type names
    pub categories: BTreeSet<String>,
    pub media: Media,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abilities: Vec<Ability>,
}

impl Record {
    /// Create a record with only the fields the core looks at.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: Vec::new(),
            categories: BTreeSet::new(),
            media: Media::default(),
            height: 0,
            weight: 0,
            base_experience: None,
            abilities: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: u32) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = media;
        self
    }

    /// Best available image: artwork, then sprite, then placeholder.
    pub fn image_url(&self) -> &str {
        self.media
            .primary_image_url
            .as_deref()
            .or(self.media.fallback_image_url.as_deref())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    pub fn has_any_category<'a, I>(&self, wanted: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        wanted.into_iter().any(|c| self.categories.contains(c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: u32,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Label used by stat bars (`special-attack` -> `Sp. Attack`).
    pub fn display_name(&self) -> String {
        match self.name.as_str() {
            "special-attack" => "Sp. Attack".to_string(),
            "special-defense" => "Sp. Defense".to_string(),
            other => other.to_uppercase(),
        }
    }

    /// Fill ratio of the stat bar, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        (f64::from(self.value) / f64::from(MAX_ATTRIBUTE_VALUE)).min(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_image_url: Option<String>,
}

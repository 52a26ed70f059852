#![forbid(unsafe_code)]

//! Product data model.
//!
//! Everything here is immutable once the catalog is loaded. Specs are a
//! closed sum type so a bat can never carry a rubber's hardness and the
//! renderer never has to guess which keys exist.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Body text used when a product has no description entry.
pub const GENERIC_DESCRIPTION: &str = "High-quality table tennis equipment designed for competitive play. Contact us for detailed specifications and recommendations.";

/// Placeholder for every unknown spec field.
pub const NOT_AVAILABLE: &str = "N/A";

pub const DEFAULT_RUBBER_COLORS: &str = "Red, Black";
pub const DEFAULT_RUBBER_THICKNESS: &str = "2.0mm and Max";

/// Long-form product description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub title: String,
    /// Raw blank-line separated segments; may contain blank entries.
    pub paragraphs: Vec<String>,
}

impl Description {
    /// Split `content` into paragraphs on blank lines.
    #[must_use]
    pub fn from_content(title: impl Into<String>, content: &str) -> Self {
        let normalized = content.replace("\r\n", "\n");
        Self {
            title: title.into(),
            paragraphs: normalized.split("\n\n").map(str::to_string).collect(),
        }
    }

    /// Fallback for products missing from the description table.
    #[must_use]
    pub fn placeholder(name: &str) -> Self {
        Self {
            title: name.to_uppercase(),
            paragraphs: vec![GENERIC_DESCRIPTION.to_string()],
        }
    }

    /// Trimmed paragraphs, skipping blank ones.
    pub fn visible_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RubberSpecs {
    pub speed: String,
    pub spin: String,
    pub control: String,
    pub strategy: String,
    pub hardness: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatSpecs {
    /// One rubber per line (forehand, backhand).
    pub rubbers: String,
    pub strategy: String,
    pub plys: String,
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BladeSpecs {
    pub plys: String,
    pub weight: String,
    pub speed: String,
    pub control: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessorySpecs {
    #[serde(rename = "type")]
    pub kind: String,
    pub material: String,
    pub size: String,
}

/// Category-tagged specification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Specs {
    Rubber(RubberSpecs),
    Bat(BatSpecs),
    Blade(BladeSpecs),
    Accessory(AccessorySpecs),
}

/// One labelled row of the spec grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecField<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

impl Specs {
    /// The all-`"N/A"` record for `category`.
    #[must_use]
    pub fn not_available(category: Category) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        match category {
            Category::Rubber => Self::Rubber(RubberSpecs {
                speed: na(),
                spin: na(),
                control: na(),
                strategy: na(),
                hardness: na(),
            }),
            Category::Bat => Self::Bat(BatSpecs {
                rubbers: na(),
                strategy: na(),
                plys: na(),
                handle: na(),
            }),
            Category::Blade => Self::Blade(BladeSpecs {
                plys: na(),
                weight: na(),
                speed: na(),
                control: na(),
            }),
            Category::Accessory => Self::Accessory(AccessorySpecs {
                kind: na(),
                material: na(),
                size: na(),
            }),
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Rubber(_) => Category::Rubber,
            Self::Bat(_) => Category::Bat,
            Self::Blade(_) => Category::Blade,
            Self::Accessory(_) => Category::Accessory,
        }
    }

    /// Display rows in their fixed per-category order.
    #[must_use]
    pub fn fields(&self) -> Vec<SpecField<'_>> {
        match self {
            Self::Rubber(s) => vec![
                row("SPEED", &s.speed),
                row("SPIN", &s.spin),
                row("CONTROL", &s.control),
                row("STRATEGY", &s.strategy),
                row("HARDNESS", &s.hardness),
            ],
            Self::Bat(s) => vec![
                row("RUBBERS", &s.rubbers),
                row("STRATEGY", &s.strategy),
                row("PLYS", &s.plys),
                row("HANDLE", &s.handle),
            ],
            Self::Blade(s) => vec![
                row("PLYS", &s.plys),
                row("WEIGHT", &s.weight),
                row("SPEED", &s.speed),
                row("CONTROL", &s.control),
            ],
            Self::Accessory(s) => vec![
                row("TYPE", &s.kind),
                row("MATERIAL", &s.material),
                row("SIZE", &s.size),
            ],
        }
    }
}

fn row<'a>(label: &'static str, value: &'a str) -> SpecField<'a> {
    SpecField { label, value }
}

/// Colour and thickness options. Only rubbers carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubberFinish {
    pub colors: Option<String>,
    pub thickness: Option<String>,
}

impl RubberFinish {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_none() && self.thickness.is_none()
    }
}

/// Display prices, kept as the page wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub current: String,
    pub old: Option<String>,
}

/// One fully resolved catalog entry.
///
/// The catalog index, not `name`, identifies a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub image_url: String,
    pub image_alt: String,
    /// Short card blurb.
    pub summary: String,
    pub price: Price,
    pub category: Category,
    pub description: Description,
    pub specs: Specs,
    pub finish: RubberFinish,
}

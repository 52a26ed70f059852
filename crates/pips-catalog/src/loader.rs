#![forbid(unsafe_code)]

//! Catalog loading.
//!
//! The page renders one card per product; the host reads each card into a
//! [`ProductCard`] (or hands over the same data as JSON) and [`load`] turns
//! the cards into an ordered [`Catalog`]. Registry lookups happen here, once,
//! so rendering never consults the tables again.
//!
//! Card data is forgiving: every field is optional, text is trimmed, and a
//! missing piece becomes an empty string rather than an error.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::CatalogError;
use crate::model::{Price, ProductRecord};
use crate::registry::SchemaRegistry;

/// Product image as shown on the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

/// Sale pricing block: a struck-through old price beside the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardPricing {
    pub old: Option<String>,
    pub current: Option<String>,
}

/// Raw data of one catalog card, as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCard {
    pub name: Option<String>,
    pub image: Option<CardImage>,
    pub description: Option<String>,
    /// Single-price layout.
    pub price: Option<String>,
    /// Sale layout; wins over `price` when present.
    pub pricing: Option<CardPricing>,
}

impl ProductCard {
    /// Card with just a name, handy for hosts and tests.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_pricing(mut self, old: impl Into<String>, current: impl Into<String>) -> Self {
        self.pricing = Some(CardPricing {
            old: Some(old.into()),
            current: Some(current.into()),
        });
        self
    }
}

/// Ordered, immutable product list for one category page.
///
/// The position of a record is its identity: trigger `i` on the page opens
/// record `i`, and duplicate names never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    category: Category,
    records: Vec<ProductRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(category: Category, records: Vec<ProductRecord>) -> Self {
        Self { category, records }
    }

    #[must_use]
    pub fn empty(category: Category) -> Self {
        Self::new(category, Vec::new())
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProductRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }
}

/// Build the catalog from page cards, in card order.
pub fn load<'a, I>(cards: I, category: Category, registry: &SchemaRegistry) -> Catalog
where
    I: IntoIterator<Item = &'a ProductCard>,
{
    let records: Vec<ProductRecord> = cards
        .into_iter()
        .map(|card| resolve_card(card, category, registry))
        .collect();
    tracing::info!(%category, products = records.len(), "catalog loaded");
    Catalog::new(category, records)
}

/// Decode a JSON array of cards and build the catalog.
pub fn load_json(
    json: &str,
    category: Category,
    registry: &SchemaRegistry,
) -> Result<Catalog, CatalogError> {
    let cards: Vec<ProductCard> = serde_json::from_str(json).map_err(CatalogError::Cards)?;
    Ok(load(&cards, category, registry))
}

fn resolve_card(card: &ProductCard, category: Category, registry: &SchemaRegistry) -> ProductRecord {
    let name = trimmed(card.name.as_deref());
    let image = card.image.clone().unwrap_or_default();
    let description = registry.describe(category, &name);
    let specs = registry.specs_of(category, &name);
    let finish = registry.colors_and_thickness(category, &name);
    tracing::trace!(%category, name = %name, "resolved product card");

    ProductRecord {
        image_url: image.src.trim().to_string(),
        image_alt: image.alt.trim().to_string(),
        summary: trimmed(card.description.as_deref()),
        price: resolve_price(card),
        category,
        description,
        specs,
        finish,
        name,
    }
}

/// The sale block wins; its current price falls back to the single price.
fn resolve_price(card: &ProductCard) -> Price {
    let single = non_blank(card.price.as_deref());
    match &card.pricing {
        Some(pricing) => Price {
            current: non_blank(pricing.current.as_deref())
                .or(single)
                .unwrap_or_default(),
            old: non_blank(pricing.old.as_deref()),
        },
        None => Price {
            current: single.unwrap_or_default(),
            old: None,
        },
    }
}

fn trimmed(text: Option<&str>) -> String {
    text.map(str::trim).unwrap_or_default().to_string()
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

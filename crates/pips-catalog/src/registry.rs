#![forbid(unsafe_code)]

//! Category schema registry.
//!
//! Maps `(category, product name)` to description text, spec fields and
//! rubber finish metadata. Every lookup is total: a name missing from the
//! tables resolves to the documented placeholders, never to an error or a
//! partially filled record.
//!
//! The tables are plain data ([`SchemaTables`]). The storefront ships a
//! built-in set; a page may replace it wholesale with a JSON document so
//! copy edits never touch code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::category::Category;
use crate::error::CatalogError;
use crate::model::{
    AccessorySpecs, BatSpecs, BladeSpecs, DEFAULT_RUBBER_COLORS, DEFAULT_RUBBER_THICKNESS,
    Description, RubberFinish, RubberSpecs, Specs,
};

/// Description table row: display title plus blank-line separated body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptionEntry {
    pub title: String,
    pub content: String,
}

/// Rubber finish row. A missing field falls back to the storefront default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinishEntry {
    pub colors: Option<String>,
    pub thickness: Option<String>,
}

/// Per-category tables keyed by product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerCategory<T> {
    pub rubber: BTreeMap<String, T>,
    pub bat: BTreeMap<String, T>,
    pub blade: BTreeMap<String, T>,
    pub accessory: BTreeMap<String, T>,
}

impl<T> Default for PerCategory<T> {
    fn default() -> Self {
        Self {
            rubber: BTreeMap::new(),
            bat: BTreeMap::new(),
            blade: BTreeMap::new(),
            accessory: BTreeMap::new(),
        }
    }
}

impl<T> PerCategory<T> {
    #[must_use]
    pub fn get(&self, category: Category) -> &BTreeMap<String, T> {
        match category {
            Category::Rubber => &self.rubber,
            Category::Bat => &self.bat,
            Category::Blade => &self.blade,
            Category::Accessory => &self.accessory,
        }
    }
}

/// Typed spec tables, one map per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecTables {
    pub rubber: BTreeMap<String, RubberSpecs>,
    pub bat: BTreeMap<String, BatSpecs>,
    pub blade: BTreeMap<String, BladeSpecs>,
    pub accessory: BTreeMap<String, AccessorySpecs>,
}

/// The complete data set behind a [`SchemaRegistry`].
///
/// JSON form:
///
/// ```json
/// {
///   "descriptions": { "rubber": { "Joola Zack": { "title": "...", "content": "..." } } },
///   "specs": { "blade": { "Impact Pure Allround": { "plys": "5", "weight": "95g", "speed": "60", "control": "85" } } },
///   "rubber_finishes": { "Joola Zack": { "colors": "Red, Black", "thickness": "Max" } }
/// }
/// ```
///
/// Missing sections are empty; unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaTables {
    pub descriptions: PerCategory<DescriptionEntry>,
    pub specs: SpecTables,
    pub rubber_finishes: BTreeMap<String, FinishEntry>,
}

impl SchemaTables {
    /// Tables the storefront ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let descriptions = |rows: &[builtin::DescriptionRow]| {
            rows.iter()
                .map(|row| {
                    (
                        row.name.to_string(),
                        DescriptionEntry {
                            title: row.title.to_string(),
                            content: row.content.to_string(),
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            descriptions: PerCategory {
                rubber: descriptions(builtin::RUBBER_DESCRIPTIONS),
                bat: descriptions(builtin::BAT_DESCRIPTIONS),
                blade: descriptions(builtin::BLADE_DESCRIPTIONS),
                accessory: descriptions(builtin::ACCESSORY_DESCRIPTIONS),
            },
            specs: SpecTables {
                rubber: builtin::RUBBER_SPECS
                    .iter()
                    .map(|(name, [speed, spin, control, strategy, hardness])| {
                        (
                            owned(name),
                            RubberSpecs {
                                speed: owned(speed),
                                spin: owned(spin),
                                control: owned(control),
                                strategy: owned(strategy),
                                hardness: owned(hardness),
                            },
                        )
                    })
                    .collect(),
                bat: builtin::BAT_SPECS
                    .iter()
                    .map(|(name, [rubbers, strategy, plys, handle])| {
                        (
                            owned(name),
                            BatSpecs {
                                rubbers: owned(rubbers),
                                strategy: owned(strategy),
                                plys: owned(plys),
                                handle: owned(handle),
                            },
                        )
                    })
                    .collect(),
                blade: builtin::BLADE_SPECS
                    .iter()
                    .map(|(name, [plys, weight, speed, control])| {
                        (
                            owned(name),
                            BladeSpecs {
                                plys: owned(plys),
                                weight: owned(weight),
                                speed: owned(speed),
                                control: owned(control),
                            },
                        )
                    })
                    .collect(),
                accessory: builtin::ACCESSORY_SPECS
                    .iter()
                    .map(|(name, [kind, material, size])| {
                        (
                            owned(name),
                            AccessorySpecs {
                                kind: owned(kind),
                                material: owned(material),
                                size: owned(size),
                            },
                        )
                    })
                    .collect(),
            },
            rubber_finishes: builtin::RUBBER_FINISHES
                .iter()
                .map(|row| {
                    (
                        owned(row.name),
                        FinishEntry {
                            colors: Some(owned(row.colors)),
                            thickness: Some(owned(row.thickness)),
                        },
                    )
                })
                .collect(),
        }
    }
}

fn owned(s: &str) -> String {
    s.to_string()
}

/// Immutable lookup service over [`SchemaTables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    tables: SchemaTables,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SchemaRegistry {
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_tables(SchemaTables::builtin())
    }

    #[must_use]
    pub fn from_tables(tables: SchemaTables) -> Self {
        Self { tables }
    }

    /// Decode replacement tables from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tables: SchemaTables = serde_json::from_str(json).map_err(CatalogError::Schema)?;
        tracing::debug!(
            rubber_specs = tables.specs.rubber.len(),
            bat_specs = tables.specs.bat.len(),
            blade_specs = tables.specs.blade.len(),
            accessory_specs = tables.specs.accessory.len(),
            "schema tables decoded"
        );
        Ok(Self::from_tables(tables))
    }

    #[must_use]
    pub fn tables(&self) -> &SchemaTables {
        &self.tables
    }

    /// Description for `name`, or the uppercase-title placeholder.
    #[must_use]
    pub fn describe(&self, category: Category, name: &str) -> Description {
        match self.tables.descriptions.get(category).get(name) {
            Some(entry) => Description::from_content(entry.title.clone(), &entry.content),
            None => Description::placeholder(name),
        }
    }

    /// Spec record for `name`, or the all-`"N/A"` record for `category`.
    #[must_use]
    pub fn specs_of(&self, category: Category, name: &str) -> Specs {
        let specs = &self.tables.specs;
        let found = match category {
            Category::Rubber => specs.rubber.get(name).cloned().map(Specs::Rubber),
            Category::Bat => specs.bat.get(name).cloned().map(Specs::Bat),
            Category::Blade => specs.blade.get(name).cloned().map(Specs::Blade),
            Category::Accessory => specs.accessory.get(name).cloned().map(Specs::Accessory),
        };
        found.unwrap_or_else(|| Specs::not_available(category))
    }

    /// Colour and thickness options. Empty for every non-rubber category.
    #[must_use]
    pub fn colors_and_thickness(&self, category: Category, name: &str) -> RubberFinish {
        if category != Category::Rubber {
            return RubberFinish::none();
        }
        let entry = self.tables.rubber_finishes.get(name);
        RubberFinish {
            colors: Some(
                entry
                    .and_then(|e| e.colors.clone())
                    .unwrap_or_else(|| DEFAULT_RUBBER_COLORS.to_string()),
            ),
            thickness: Some(
                entry
                    .and_then(|e| e.thickness.clone())
                    .unwrap_or_else(|| DEFAULT_RUBBER_THICKNESS.to_string()),
            ),
        }
    }
}

#![forbid(unsafe_code)]

//! Product category tag.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of product categories a catalog page can show.
///
/// A page renders exactly one category; the tag picks the schema tables and
/// the spec field layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Rubber,
    Bat,
    Blade,
    Accessory,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Rubber, Self::Bat, Self::Blade, Self::Accessory];

    /// Parse a page tag (`rubber | bat | blade | accessory`), case-insensitive.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(tag))
    }

    /// Parse a page tag, falling back to [`Category::Rubber`].
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rubber => "rubber",
            Self::Bat => "bat",
            Self::Blade => "blade",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!(Category::parse("Blade"), Some(Category::Blade));
        assert_eq!(Category::parse(" accessory "), Some(Category::Accessory));
        assert_eq!(Category::parse("paddle"), None);
    }

    #[test]
    fn unknown_or_empty_tag_defaults_to_rubber() {
        assert_eq!(Category::from_tag_or_default(""), Category::Rubber);
        assert_eq!(Category::from_tag_or_default("net"), Category::Rubber);
        assert_eq!(Category::from_tag_or_default("bat"), Category::Bat);
    }

    #[test]
    fn display_matches_tag() {
        for category in Category::ALL {
            assert_eq!(Category::parse(&category.to_string()), Some(category));
        }
    }
}

//! # Product Model
//!
//! Products are the records the specification engine filters. Each one carries
//! a display name plus two attributes drawn from closed vocabularies:
//!
//! | Attribute | Values |
//! |-----------|--------|
//! | [`Color`] | `red`, `green`, `blue` |
//! | [`Size`]  | `small`, `medium`, `large` |
//!
//! Products are immutable once built. Attribute access for specifications goes
//! through [`HasAttribute`], which is what lets an equality specification on a
//! given attribute type apply only to records that actually carry it.
//!
//! Catalogs serialize as a JSON array:
//!
//! ```json
//! [{ "name": "Apple", "color": "green", "size": "small" }]
//! ```

use crate::error::{Result, SolidError};
use crate::specification::HasAttribute;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolidError::Parse(format!("Unknown color: {}", s)))
    }
}

impl FromStr for Size {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        Size::ALL
            .into_iter()
            .find(|sz| sz.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolidError::Parse(format!("Unknown size: {}", s)))
    }
}

/// A named product with a color and a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl HasAttribute<Color> for Product {
    fn attribute(&self) -> &Color {
        &self.color
    }
}

impl HasAttribute<Size> for Product {
    fn attribute(&self) -> &Size {
        &self.size
    }
}

/// The three-product catalog used when no catalog file is given.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

/// Parse a JSON array of products.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("BLUE".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!(" Red ".parse::<Color>().unwrap(), Color::Red);
    }

    #[test]
    fn unknown_color_is_a_parse_error() {
        let err = "purple".parse::<Color>().unwrap_err();
        assert!(matches!(err, SolidError::Parse(_)));
        assert!(err.to_string().contains("purple"));
    }

    #[test]
    fn size_parses_and_displays() {
        for size in Size::ALL {
            assert_eq!(size.to_string().parse::<Size>().unwrap(), size);
        }
        assert!("huge".parse::<Size>().is_err());
    }

    #[test]
    fn product_accessors() {
        let p = Product::new("Apple", Color::Green, Size::Small);
        assert_eq!(p.name(), "Apple");
        assert_eq!(p.color(), Color::Green);
        assert_eq!(p.size(), Size::Small);
        assert_eq!(*HasAttribute::<Color>::attribute(&p), Color::Green);
        assert_eq!(*HasAttribute::<Size>::attribute(&p), Size::Small);
    }

    #[test]
    fn sample_catalog_is_apple_tree_house() {
        let names: Vec<_> = sample_catalog()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Apple", "Tree", "House"]);
    }

    #[test]
    fn parse_catalog_reads_lowercase_attributes() {
        let json = r#"[
            {"name": "Fern", "color": "green", "size": "medium"},
            {"name": "Barn", "color": "red", "size": "large"}
        ]"#;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0], Product::new("Fern", Color::Green, Size::Medium));
        assert_eq!(catalog[1].color(), Color::Red);
    }

    #[test]
    fn parse_catalog_rejects_unknown_values() {
        let json = r#"[{"name": "Sky", "color": "cyan", "size": "large"}]"#;
        assert!(matches!(
            parse_catalog(json).unwrap_err(),
            SolidError::Catalog(_)
        ));
    }
}

//! Domain model
//!
//! Inventory items, ingredient requirements and recipes. Everything the cache
//! persists and the matcher consumes is defined here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity used when the catalog gives no measure for an ingredient
pub const DEFAULT_QUANTITY: &str = "a bit";

/// Kind-specific details of an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    #[serde(alias = "Spirit")]
    Spirit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        type_of_liquor: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        abv: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        origin: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tasting_notes: Option<String>,
        #[serde(
            default,
            alias = "suggested_pairings_raw",
            skip_serializing_if = "Option::is_none"
        )]
        suggested_pairings: Option<String>,
    },
    #[serde(alias = "Mixer")]
    Mixer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mixer_type: Option<String>,
    },
    #[serde(alias = "Garnish")]
    Garnish {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        garnish_type: Option<String>,
    },
    #[serde(alias = "InventoryItem")]
    Generic,
}

/// A bottle, carton or piece of fruit on the shelf.
///
/// Only `name`, `brand` and `category` take part in matching; the rest is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,

    /// Empty brand acts as a wildcard
    #[serde(default)]
    pub brand: String,

    pub category: String,

    #[serde(default)]
    pub quantity: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default, alias = "user_notes")]
    pub notes: String,

    #[serde(flatten)]
    pub kind: ItemKind,
}

impl InventoryItem {
    /// Create a generic item with no kind-specific details
    #[cfg(test)]
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            quantity: String::new(),
            price: 0.0,
            notes: String::new(),
            kind: ItemKind::Generic,
        }
    }
}

/// One line of a recipe: "50ml of Gin"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    /// Matched case-insensitively against inventory categories
    pub category_needed: String,

    /// Descriptive only, never validated
    pub quantity: String,

    /// Specific brand (or self-branded item) required, serialized as null when absent
    #[serde(default)]
    pub brand_optional: Option<String>,
}

impl IngredientRequirement {
    /// Create a requirement any brand of the category satisfies
    pub fn new(category_needed: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            category_needed: category_needed.into(),
            quantity: quantity.into(),
            brand_optional: None,
        }
    }

    /// Require a specific brand
    #[cfg(test)]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand_optional = Some(brand.into());
        self
    }
}

impl fmt::Display for IngredientRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.quantity, self.category_needed)?;
        if let Some(brand) = &self.brand_optional {
            write!(f, " (Brand: {})", brand)?;
        }
        Ok(())
    }
}

/// A cocktail recipe.
///
/// Ingredient order is for display; matching treats the list as a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    pub ingredients: Vec<IngredientRequirement>,

    #[serde(default)]
    pub instructions: String,

    #[serde(default)]
    pub garnish: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Primary image URL or local path
    #[serde(default)]
    pub image_reference: Option<String>,
}

impl Recipe {
    /// Build a recipe, refusing an empty name or an empty ingredient list
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<IngredientRequirement>,
        instructions: impl Into<String>,
    ) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() || ingredients.is_empty() {
            return None;
        }

        Some(Self {
            name,
            ingredients,
            instructions: instructions.into(),
            garnish: None,
            description: None,
            image_reference: None,
        })
    }

    /// Whether this recipe satisfies the construction invariants.
    /// Deserialized recipes bypass `new`, so loaders check this.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.ingredients.is_empty()
    }
}

//! Availability matcher
//!
//! Decides which recipes the current inventory can make. All comparisons are
//! case-insensitive. Quantities are ignored: an ingredient is either on the
//! shelf or it isn't.

use std::collections::HashSet;

use crate::core::model::{IngredientRequirement, InventoryItem, Recipe};

/// Brand value marking an item as brand-less
pub const NO_BRAND: &str = "n/a";

/// Lookup sets derived from an inventory
#[derive(Debug, Default)]
pub struct InventoryIndex {
    categories: HashSet<String>,
    category_brands: HashSet<(String, String)>,
}

impl InventoryIndex {
    pub fn build(inventory: &[InventoryItem]) -> Self {
        let mut index = Self::default();

        for item in inventory {
            let category = item.category.to_lowercase();
            let brand = item.brand.to_lowercase();
            let name = item.name.to_lowercase();

            // Self-branded or brand-less items can satisfy a brand by name
            if name == brand || brand == NO_BRAND {
                index.category_brands.insert((category.clone(), name));
            }
            index.category_brands.insert((category.clone(), brand));
            index.categories.insert(category);
        }

        index
    }

    /// Whether a single requirement is on the shelf.
    ///
    /// A branded requirement also passes when its category and brand are the
    /// same word and that word is a stocked category. This accepts any item
    /// filed under that category regardless of its brand.
    pub fn satisfies(&self, requirement: &IngredientRequirement) -> bool {
        let category = requirement.category_needed.to_lowercase();

        match &requirement.brand_optional {
            None => self.categories.contains(&category),
            Some(brand) => {
                let brand = brand.to_lowercase();
                if self.category_brands.contains(&(category.clone(), brand.clone())) {
                    return true;
                }
                self.categories.contains(&brand) && category == brand
            }
        }
    }

    /// Whether every ingredient of a recipe is on the shelf
    pub fn can_make(&self, recipe: &Recipe) -> bool {
        recipe.ingredients.iter().all(|req| self.satisfies(req))
    }
}

/// Recipes the inventory can make, in their original order
pub fn find_makeable(inventory: &[InventoryItem], recipes: &[Recipe]) -> Vec<Recipe> {
    let index = InventoryIndex::build(inventory);
    recipes
        .iter()
        .filter(|recipe| index.can_make(recipe))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, ingredients: Vec<IngredientRequirement>) -> Recipe {
        Recipe::new(name, ingredients, "Mix.").unwrap()
    }

    fn req(category: &str) -> IngredientRequirement {
        IngredientRequirement::new(category, "1 part")
    }

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_category_only() {
        let inventory = vec![InventoryItem::new("Tanqueray No. Ten", "Tanqueray", "Gin")];
        let recipes = vec![recipe("Gin Neat", vec![req("Gin")])];

        assert_eq!(names(&find_makeable(&inventory, &recipes)), vec!["Gin Neat"]);
    }

    #[test]
    fn test_case_insensitive_category() {
        let inventory = vec![InventoryItem::new("House Gin", "House", "GIN")];
        let recipes = vec![recipe("Gin Neat", vec![req("gin")])];

        assert_eq!(find_makeable(&inventory, &recipes).len(), 1);
    }

    #[test]
    fn test_missing_ingredient_blocks_recipe() {
        let inventory = vec![InventoryItem::new("Hendrick's Gin", "Hendrick's", "Gin")];
        let recipes = vec![recipe(
            "Gin & Tonic",
            vec![req("Gin"), req("Tonic Water"), req("Lime")],
        )];

        assert!(find_makeable(&inventory, &recipes).is_empty());
    }

    #[test]
    fn test_self_branded_item() {
        let inventory = vec![InventoryItem::new("Campari", "Campari", "Campari")];
        let recipes = vec![recipe(
            "Campari Soda Base",
            vec![IngredientRequirement::new("Campari", "30ml").with_brand("Campari")],
        )];

        assert_eq!(find_makeable(&inventory, &recipes).len(), 1);
    }

    #[test]
    fn test_category_equals_brand_fallback() {
        // Neither brand nor name is "Campari"; only the category matches
        let inventory = vec![InventoryItem::new("Bitter Red", "Some Distillery", "Campari")];
        let requirement = IngredientRequirement::new("Campari", "30ml").with_brand("Campari");
        let index = InventoryIndex::build(&inventory);

        assert!(index.satisfies(&requirement));
    }

    #[test]
    fn test_fallback_accepts_unrelated_brand_in_same_category() {
        // Over-permissive: any brand under a category named like the brand passes
        let inventory = vec![InventoryItem::new("Cheap Aperitivo", "Knockoff", "Aperol")];
        let requirement = IngredientRequirement::new("APEROL", "30ml").with_brand("aperol");

        assert!(InventoryIndex::build(&inventory).satisfies(&requirement));
    }

    #[test]
    fn test_brand_required() {
        let inventory = vec![InventoryItem::new("Martini Rosso", "Martini", "Sweet Vermouth")];
        let index = InventoryIndex::build(&inventory);

        let wanted = IngredientRequirement::new("Sweet Vermouth", "30ml").with_brand("martini");
        let other = IngredientRequirement::new("Sweet Vermouth", "30ml").with_brand("Cocchi");
        assert!(index.satisfies(&wanted));
        assert!(!index.satisfies(&other));
    }

    #[test]
    fn test_brand_under_wrong_category() {
        let inventory = vec![InventoryItem::new("Martini Rosso", "Martini", "Vermouth")];
        let requirement = IngredientRequirement::new("Sweet Vermouth", "30ml").with_brand("Martini");

        assert!(!InventoryIndex::build(&inventory).satisfies(&requirement));
    }

    #[test]
    fn test_brandless_item_matches_by_name() {
        let inventory = vec![InventoryItem::new("Angostura", "N/A", "Bitters")];
        let requirement = IngredientRequirement::new("Bitters", "2 dashes").with_brand("Angostura");

        assert!(InventoryIndex::build(&inventory).satisfies(&requirement));
    }

    #[test]
    fn test_name_not_used_when_branded_differently() {
        let inventory = vec![InventoryItem::new("Angostura", "House of Angostura", "Bitters")];
        let requirement = IngredientRequirement::new("Bitters", "2 dashes").with_brand("Angostura");

        assert!(!InventoryIndex::build(&inventory).satisfies(&requirement));
    }

    #[test]
    fn test_preserves_input_order() {
        let inventory = vec![
            InventoryItem::new("Absolut Vodka", "Absolut", "Vodka"),
            InventoryItem::new("Generic Orange Juice", "Juicy Co.", "Orange Juice"),
            InventoryItem::new("Hendrick's Gin", "Hendrick's", "Gin"),
        ];
        let recipes = vec![
            recipe("Screwdriver", vec![req("Vodka"), req("Orange Juice")]),
            recipe("Martini", vec![req("Gin"), req("Dry Vermouth")]),
            recipe("Gin Neat", vec![req("Gin")]),
            recipe("Vodka Neat", vec![req("Vodka")]),
        ];

        assert_eq!(
            names(&find_makeable(&inventory, &recipes)),
            vec!["Screwdriver", "Gin Neat", "Vodka Neat"]
        );
    }

    #[test]
    fn test_empty_inventory() {
        let recipes = vec![recipe("Gin Neat", vec![req("Gin")])];
        assert!(find_makeable(&[], &recipes).is_empty());
    }
}

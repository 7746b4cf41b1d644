//! Recipe normalizer
//!
//! Turns a raw catalog drink into a [`Recipe`]. Records without a name or
//! without a single usable ingredient are dropped.

use crate::backends::record::{DrinkRecord, INGREDIENT_SLOTS};
use crate::core::model::{IngredientRequirement, Recipe, DEFAULT_QUANTITY};

/// Instructions used when the catalog has none
pub const NO_INSTRUCTIONS: &str = "No instructions provided.";

/// Normalize a catalog record, or `None` if it is unusable
pub fn normalize(record: &DrinkRecord) -> Option<Recipe> {
    let name = non_blank(record.name.as_deref())?;
    let ingredients = ingredient_requirements(record);

    let mut recipe = Recipe::new(
        name,
        ingredients,
        non_blank(record.instructions.as_deref()).unwrap_or(NO_INSTRUCTIONS),
    )?;
    recipe.garnish = non_blank(record.garnish.as_deref()).map(str::to_string);
    recipe.description = non_blank(record.category.as_deref()).map(str::to_string);
    recipe.image_reference = non_blank(record.thumbnail.as_deref()).map(str::to_string);
    Some(recipe)
}

/// Read ingredient slots in order, stopping at the first blank one.
/// Slots after a gap are ignored even if populated.
pub fn ingredient_requirements(record: &DrinkRecord) -> Vec<IngredientRequirement> {
    let mut requirements = Vec::new();

    for index in 1..=INGREDIENT_SLOTS {
        let (ingredient, measure) = record.slot(index);
        let Some(ingredient) = non_blank(ingredient) else {
            break;
        };

        let quantity = non_blank(measure).unwrap_or(DEFAULT_QUANTITY);
        // The catalog never separates brand from category
        requirements.push(IngredientRequirement::new(ingredient, quantity));
    }

    requirements
}

/// Trimmed value, or `None` if absent or blank
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stops_at_first_gap() {
        let record = DrinkRecord::with_slots(
            "Gin Tonic",
            &[("Gin", "50ml"), ("Tonic", "120ml"), ("", ""), ("Lime", "")],
        );

        let recipe = normalize(&record).unwrap();
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].category_needed, "Gin");
        assert_eq!(recipe.ingredients[0].quantity, "50ml");
        assert_eq!(recipe.ingredients[1].category_needed, "Tonic");
        assert_eq!(recipe.ingredients[1].quantity, "120ml");
    }

    #[test]
    fn test_blank_measure_gets_placeholder() {
        let record = DrinkRecord::with_slots("Gin Lime", &[("Gin", "50ml"), ("Lime", "  ")]);
        let recipe = normalize(&record).unwrap();
        assert_eq!(recipe.ingredients[1].quantity, DEFAULT_QUANTITY);
    }

    #[test]
    fn test_null_measure_gets_placeholder() {
        let record: DrinkRecord = serde_json::from_value(json!({
            "strDrink": "Screwdriver",
            "strIngredient1": " Vodka ",
            "strMeasure1": " 2 oz ",
            "strIngredient2": "Orange juice",
            "strMeasure2": null
        }))
        .unwrap();

        let recipe = normalize(&record).unwrap();
        assert_eq!(recipe.ingredients[0].category_needed, "Vodka");
        assert_eq!(recipe.ingredients[0].quantity, "2 oz");
        assert_eq!(recipe.ingredients[1].quantity, "a bit");
    }

    #[test]
    fn test_brand_is_never_set() {
        let record = DrinkRecord::with_slots("Negroni", &[("Gin", "1 oz"), ("Campari", "1 oz")]);
        let recipe = normalize(&record).unwrap();
        assert!(recipe.ingredients.iter().all(|i| i.brand_optional.is_none()));
    }

    #[test]
    fn test_rejects_missing_name() {
        let mut record = DrinkRecord::with_slots("", &[("Gin", "50ml")]);
        assert!(normalize(&record).is_none());

        record.name = None;
        assert!(normalize(&record).is_none());
    }

    #[test]
    fn test_rejects_zero_ingredients() {
        let record = DrinkRecord::with_slots("Air", &[("", "1 oz"), ("Gin", "50ml")]);
        assert!(normalize(&record).is_none());
    }

    #[test]
    fn test_optional_fields() {
        let record: DrinkRecord = serde_json::from_value(json!({
            "strDrink": "Margarita",
            "strCategory": "Ordinary Drink",
            "strInstructions": null,
            "strGarnish": "",
            "strDrinkThumb": "https://example.com/margarita.jpg",
            "strIngredient1": "Tequila",
            "strMeasure1": "1 1/2 oz"
        }))
        .unwrap();

        let recipe = normalize(&record).unwrap();
        assert_eq!(recipe.instructions, NO_INSTRUCTIONS);
        assert_eq!(recipe.description.as_deref(), Some("Ordinary Drink"));
        assert_eq!(recipe.garnish, None);
        assert_eq!(
            recipe.image_reference.as_deref(),
            Some("https://example.com/margarita.jpg")
        );
    }

    #[test]
    fn test_reads_all_fifteen_slots() {
        let slots: Vec<(String, String)> = (1..=16)
            .map(|i| (format!("Ingredient {}", i), format!("{} dash", i)))
            .collect();
        let borrowed: Vec<(&str, &str)> = slots
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        let record = DrinkRecord::with_slots("Kitchen Sink", &borrowed);

        let recipe = normalize(&record).unwrap();
        assert_eq!(recipe.ingredients.len(), INGREDIENT_SLOTS);
    }
}

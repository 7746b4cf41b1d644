//! Raw catalog records
//!
//! Shapes of the JSON bodies returned by the cocktail catalog. Fields are kept
//! loose (everything optional) so that normalization, not deserialization,
//! decides what is usable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of positional ingredient slots a drink record exposes
pub const INGREDIENT_SLOTS: usize = 15;

/// One drink as returned by `search.php?s=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrinkRecord {
    #[serde(rename = "idDrink", default)]
    pub id: Option<String>,

    #[serde(rename = "strDrink", default)]
    pub name: Option<String>,

    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,

    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,

    #[serde(rename = "strGarnish", default)]
    pub garnish: Option<String>,

    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,

    /// Everything else, including `strIngredientN` / `strMeasureN`
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DrinkRecord {
    /// Ingredient name and measure at a 1-based slot
    pub fn slot(&self, index: usize) -> (Option<&str>, Option<&str>) {
        let ingredient = self
            .fields
            .get(&format!("strIngredient{}", index))
            .and_then(Value::as_str);
        let measure = self
            .fields
            .get(&format!("strMeasure{}", index))
            .and_then(Value::as_str);
        (ingredient, measure)
    }

    /// Build a record from a name and literal slot data (slots start at 1)
    #[cfg(test)]
    pub fn with_slots(name: &str, slots: &[(&str, &str)]) -> Self {
        let mut fields = Map::new();
        for (i, (ingredient, measure)) in slots.iter().enumerate() {
            fields.insert(
                format!("strIngredient{}", i + 1),
                Value::String(ingredient.to_string()),
            );
            fields.insert(
                format!("strMeasure{}", i + 1),
                Value::String(measure.to_string()),
            );
        }

        Self {
            name: Some(name.to_string()),
            fields,
            ..Default::default()
        }
    }
}

/// One ingredient as returned by `search.php?i=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    #[serde(rename = "idIngredient", default)]
    pub id: Option<String>,

    #[serde(rename = "strIngredient", default)]
    pub name: Option<String>,

    #[serde(rename = "strDescription", default)]
    pub description: Option<String>,

    #[serde(rename = "strType", default)]
    pub kind: Option<String>,

    #[serde(rename = "strAlcohol", default)]
    pub alcohol: Option<String>,

    #[serde(rename = "strABV", default)]
    pub abv: Option<String>,
}

/// Collection key of a search response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Drinks,
    Ingredients,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Drinks => "drinks",
            Collection::Ingredients => "ingredients",
        }
    }

    /// Cache subdirectory for raw responses of this collection
    pub fn cache_dir_name(&self) -> &'static str {
        match self {
            Collection::Drinks => "cocktails",
            Collection::Ingredients => "ingredients",
        }
    }

    /// Body the catalog returns (and the raw cache stores) for a miss
    pub fn not_found_body(&self) -> Value {
        let mut body = Map::new();
        body.insert(self.key().to_string(), Value::Null);
        Value::Object(body)
    }
}

/// Outcome of reading a response body
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    /// First entry of a non-empty collection
    Found(Value),
    /// Collection is null, empty or absent
    NotFound,
    /// Body is not a JSON object
    Invalid,
}

/// Classify a response body for the given collection
pub fn classify_body(body: &Value, collection: Collection) -> BodyShape {
    let Some(obj) = body.as_object() else {
        return BodyShape::Invalid;
    };

    match obj.get(collection.key()) {
        Some(Value::Array(entries)) => match entries.first() {
            Some(first) => BodyShape::Found(first.clone()),
            None => BodyShape::NotFound,
        },
        Some(Value::Null) | None => BodyShape::NotFound,
        Some(_) => BodyShape::Invalid,
    }
}

use serde::Deserialize;

/// A fully parsed recipe. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub minutes: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Copied from the source as-is; not checked against `ingredients.len()`
    pub ingredient_count: u32,
}

/// Raw CSV row. List columns are still serialized list literals here.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub minutes: u32,
    pub ingredients: String,
    pub steps: String,
    pub n_ingredients: u32,
}

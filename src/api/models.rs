use crate::catalog::Recipe;
use crate::matcher::MatchResult;
use serde::{Deserialize, Serialize};

/// Search request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Falls back to the configured result count
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub terms: Vec<String>,
    pub results: Vec<RecipeCard>,
    pub total: usize,
}

/// Recipe card for search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCard {
    pub id: i64,
    pub name: String,
    pub minutes: u32,
    pub score: usize,
    pub ingredient_count: u32,
}

impl From<&MatchResult> for RecipeCard {
    fn from(result: &MatchResult) -> Self {
        Self {
            id: result.recipe.id,
            name: result.recipe.name.clone(),
            minutes: result.recipe.minutes,
            score: result.score,
            ingredient_count: result.recipe.ingredient_count,
        }
    }
}

/// Full recipe details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub name: String,
    pub minutes: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub ingredient_count: u32,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            minutes: recipe.minutes,
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            ingredient_count: recipe.ingredient_count,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub recipes: usize,
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{
    api::models::*,
    catalog::RecipeCatalog,
    config::Settings,
    matcher::{MatchEngine, TermExtractor},
    presenter, Error, Result,
};

const MAX_QUERY_CHARS: usize = 500;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RecipeCatalog>,
    pub extractor: Arc<TermExtractor>,
    pub engine: Arc<MatchEngine>,
    pub settings: Settings,
}

/// GET /api/search - Rank recipes against a free-text ingredient query
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    debug!("Search request: {:?}", params);

    if params.q.chars().count() > MAX_QUERY_CHARS {
        return Err(Error::Validation(format!(
            "Query must be at most {MAX_QUERY_CHARS} characters"
        )));
    }

    let limit = params
        .limit
        .unwrap_or(state.settings.matching.max_results)
        .min(state.settings.server.api_max_limit)
        .max(1);

    let terms = state.extractor.extract(&params.q)?;
    let results = state.engine.search(&terms, state.catalog.all(), limit);

    let results: Vec<RecipeCard> = results.iter().map(RecipeCard::from).collect();

    Ok(Json(SearchResponse {
        terms: terms.into_iter().collect(),
        total: results.len(),
        results,
    }))
}

/// GET /api/recipes/:id - Get recipe details
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeDetail>> {
    debug!("Get recipe request: {}", id);

    let recipe = state
        .catalog
        .get(id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;

    Ok(Json(RecipeDetail::from(recipe.as_ref())))
}

/// GET /api/recipes/:id/text - Recipe rendered for display
pub async fn get_recipe_text(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String> {
    debug!("Get recipe text request: {}", id);

    let recipe = state
        .catalog
        .get(id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;

    Ok(presenter::format_recipe(recipe))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        recipes: state.catalog.len(),
    }))
}

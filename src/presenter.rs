//! Plain-text rendering of matched recipes.

use crate::catalog::Recipe;
use crate::matcher::MatchResult;

/// Full multi-line rendering of a matched recipe
pub fn format_match(result: &MatchResult) -> String {
    format_recipe(&result.recipe)
}

/// Full multi-line rendering of a recipe: header, time, ingredients, numbered steps
pub fn format_recipe(recipe: &Recipe) -> String {
    let mut output = format!("\nRecipe: {} (ID: {})", recipe.name, recipe.id);
    output.push_str(&format!("\nTime: {} minutes", recipe.minutes));

    output.push_str(&format!("\n\nIngredients ({}):", recipe.ingredient_count));
    for ingredient in &recipe.ingredients {
        output.push_str(&format!("\n- {ingredient}"));
    }

    output.push_str("\n\nSteps:");
    for (index, step) in recipe.steps.iter().enumerate() {
        output.push_str(&format!("\n{}. {}", index + 1, step));
    }

    output
}

/// One line of a result listing, `rank` counted from 1
pub fn format_summary(rank: usize, result: &MatchResult, term_count: usize) -> String {
    format!(
        "{}. {} ({} min) - Score: {}/{}",
        rank, result.recipe.name, result.recipe.minutes, result.score, term_count
    )
}

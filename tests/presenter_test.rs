// Rendering of recipes for display
use recipe_finder::matcher::MatchResult;
use recipe_finder::presenter::{format_match, format_summary};
use recipe_finder::Recipe;
use std::sync::Arc;

fn result(ingredients: &[&str], steps: &[&str]) -> MatchResult {
    MatchResult {
        recipe: Arc::new(Recipe {
            id: 31490,
            name: "a bit different breakfast pizza".to_string(),
            minutes: 30,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            ingredient_count: ingredients.len() as u32,
        }),
        score: 2,
    }
}

/// Pull the "- item" lines back out of the ingredients section
fn parse_ingredients(rendered: &str) -> Vec<String> {
    rendered
        .lines()
        .skip_while(|line| !line.starts_with("Ingredients ("))
        .skip(1)
        .take_while(|line| !line.is_empty())
        .map(|line| line.strip_prefix("- ").unwrap().to_string())
        .collect()
}

fn parse_steps(rendered: &str) -> Vec<String> {
    rendered
        .lines()
        .skip_while(|line| *line != "Steps:")
        .skip(1)
        .enumerate()
        .map(|(index, line)| {
            line.strip_prefix(&format!("{}. ", index + 1))
                .unwrap()
                .to_string()
        })
        .collect()
}

#[test]
fn test_ingredients_round_trip_in_order() {
    let ingredients = [
        "prepared pizza crust",
        "sausage patty",
        "eggs",
        "milk",
        "salt and pepper",
        "cheese",
    ];
    let rendered = format_match(&result(&ingredients, &["preheat oven", "bake"]));

    assert_eq!(parse_ingredients(&rendered), ingredients);
}

#[test]
fn test_steps_are_numbered_from_one() {
    let steps = ["preheat oven to 425 degrees f", "press dough into pan", "bake"];
    let rendered = format_match(&result(&["crust"], &steps));

    assert_eq!(parse_steps(&rendered), steps);
}

#[test]
fn test_header_lines() {
    let rendered = format_match(&result(&["crust"], &["bake"]));
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Recipe: a bit different breakfast pizza (ID: 31490)");
    assert_eq!(lines[2], "Time: 30 minutes");
    assert_eq!(lines[4], "Ingredients (1):");
}

#[test]
fn test_rendering_is_deterministic() {
    let match_result = result(&["crust", "cheese"], &["bake"]);

    assert_eq!(format_match(&match_result), format_match(&match_result));
}

#[test]
fn test_summary_line() {
    let line = format_summary(3, &result(&["crust"], &["bake"]), 4);

    assert_eq!(line, "3. a bit different breakfast pizza (30 min) - Score: 2/4");
}

use crate::catalog::RecipeCatalog;
use crate::matcher::{MatchEngine, MatchResult, Similarity, TermExtractor};
use crate::presenter;
use crate::session::{Request, Response, Session};
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use tracing::info;

const QUERY_PROMPT: &str = "\nWhat ingredients do you have? ";
const SELECTION_PROMPT: &str = "\nEnter recipe number to view details, or 'back' to search again: ";

/// Search once and print a table of the ranked recipes
pub fn search<S: Similarity, W: Write>(
    out: &mut W,
    catalog: &RecipeCatalog,
    extractor: &TermExtractor,
    engine: &MatchEngine<S>,
    query: &str,
    limit: usize,
) -> Result<()> {
    let terms = extractor.extract(query)?;
    let results = engine.search(&terms, catalog.all(), limit);

    info!(
        "Search for {:?} returned {} recipes",
        query,
        results.len()
    );

    print_search_results(out, &terms, &results)?;
    Ok(())
}

/// Print one recipe by ID
pub fn show<W: Write>(out: &mut W, catalog: &RecipeCatalog, recipe_id: i64) -> Result<()> {
    let recipe = catalog
        .get(recipe_id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {recipe_id} not found")))?;

    writeln!(out, "{}", presenter::format_recipe(recipe))?;
    Ok(())
}

/// Prompt for ingredients until the user quits or input ends
pub fn run_interactive<S, R, W>(session: &mut Session<'_, S>, mut input: R, out: &mut W) -> Result<()>
where
    S: Similarity,
    R: BufRead,
    W: Write,
{
    writeln!(out, "=== Recipe Finder ===")?;
    writeln!(
        out,
        "Example inputs: 'I have eggs and butter', 'chicken recipes', 'quick pasta'"
    )?;
    writeln!(out, "Type 'quit' to exit")?;

    loop {
        let Some(line) = prompt(&mut input, out, QUERY_PROMPT)? else {
            break;
        };

        match session.handle(Request::parse_query(&line))? {
            Response::Quit => break,
            Response::NoMatches { terms } => {
                writeln!(out, "\nLooking for recipes with: {}", join_terms(&terms))?;
                writeln!(
                    out,
                    "\nNo recipes found with those ingredients. Try different ones."
                )?;
            }
            Response::Matches { terms, results } => {
                writeln!(out, "\nLooking for recipes with: {}", join_terms(&terms))?;
                writeln!(out, "\nFound {} matching recipes:", results.len())?;
                for (index, result) in results.iter().enumerate() {
                    writeln!(
                        out,
                        "{}",
                        presenter::format_summary(index + 1, result, terms.len())
                    )?;
                }

                let Some(choice) = prompt(&mut input, out, SELECTION_PROMPT)? else {
                    break;
                };

                match session.handle(Request::parse_selection(&choice))? {
                    Response::Detail(text) => writeln!(out, "{text}")?,
                    Response::InvalidSelection { available, .. } => {
                        writeln!(out, "Please pick a number between 1 and {available}.")?
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn join_terms(terms: &BTreeSet<String>) -> String {
    terms.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn print_search_results<W: Write>(
    out: &mut W,
    terms: &BTreeSet<String>,
    results: &[MatchResult],
) -> Result<()> {
    writeln!(out, "Looking for recipes with: {}", join_terms(terms))?;

    if results.is_empty() {
        writeln!(out, "No recipes found")?;
        return Ok(());
    }

    writeln!(out, "\nFound {} recipes:\n", results.len())?;
    writeln!(out, "{:<10} {:<45} {:<8} {:<6}", "ID", "Name", "Minutes", "Score")?;
    writeln!(out, "{}", "-".repeat(72))?;

    for result in results {
        writeln!(
            out,
            "{:<10} {:<45} {:<8} {}/{}",
            result.recipe.id,
            truncate(&result.recipe.name, 45),
            result.recipe.minutes,
            result.score,
            terms.len()
        )?;
    }

    writeln!(out, "\nTo view a recipe: recipe-finder show <ID>")?;
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("crème brûlée tart", 8), "crème...");
    }

    #[test]
    fn test_join_terms_is_sorted() {
        let terms: BTreeSet<String> = ["milk", "egg", "flour"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(join_terms(&terms), "egg, flour, milk");
    }
}

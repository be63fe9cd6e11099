//! Request/response adapter over the matching core.
//!
//! A [`Session`] remembers the last ranked list so a follow-up selection can
//! be resolved to a recipe. Terminal loops and other front ends only translate
//! their input into [`Request`]s and render the [`Response`]s.

use crate::catalog::RecipeCatalog;
use crate::error::Result;
use crate::matcher::{MatchEngine, MatchResult, Similarity, TermExtractor};
use crate::presenter;
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search(String),
    /// 1-based index into the last result list
    Select(usize),
    Back,
    Quit,
}

impl Request {
    /// Interpret a line typed at the query prompt
    pub fn parse_query(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            Request::Quit
        } else {
            Request::Search(line.to_string())
        }
    }

    /// Interpret a line typed at the selection prompt. Anything that is not
    /// a plain number goes back to searching.
    pub fn parse_selection(line: &str) -> Self {
        let line = line.trim();
        if !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()) {
            match line.parse() {
                Ok(index) => Request::Select(index),
                Err(_) => Request::Select(usize::MAX),
            }
        } else {
            Request::Back
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Matches {
        terms: BTreeSet<String>,
        results: Vec<MatchResult>,
    },
    NoMatches {
        terms: BTreeSet<String>,
    },
    Detail(String),
    InvalidSelection {
        index: usize,
        available: usize,
    },
    Cleared,
    Quit,
}

pub struct Session<'a, S: Similarity> {
    catalog: &'a RecipeCatalog,
    extractor: &'a TermExtractor,
    engine: &'a MatchEngine<S>,
    limit: usize,
    last_results: Vec<MatchResult>,
}

impl<'a, S: Similarity> Session<'a, S> {
    pub fn new(
        catalog: &'a RecipeCatalog,
        extractor: &'a TermExtractor,
        engine: &'a MatchEngine<S>,
        limit: usize,
    ) -> Self {
        Self {
            catalog,
            extractor,
            engine,
            limit,
            last_results: Vec::new(),
        }
    }

    /// Results of the most recent search
    pub fn last_results(&self) -> &[MatchResult] {
        &self.last_results
    }

    pub fn handle(&mut self, request: Request) -> Result<Response> {
        match request {
            Request::Search(text) => self.search(&text),
            Request::Select(index) => Ok(self.select(index)),
            Request::Back => {
                self.last_results.clear();
                Ok(Response::Cleared)
            }
            Request::Quit => Ok(Response::Quit),
        }
    }

    fn search(&mut self, text: &str) -> Result<Response> {
        let terms = self.extractor.extract(text)?;
        debug!("Searching catalog with terms: {:?}", terms);

        self.last_results = self.engine.search(&terms, self.catalog.all(), self.limit);

        if self.last_results.is_empty() {
            Ok(Response::NoMatches { terms })
        } else {
            Ok(Response::Matches {
                terms,
                results: self.last_results.clone(),
            })
        }
    }

    fn select(&self, index: usize) -> Response {
        let available = self.last_results.len();

        match index.checked_sub(1).and_then(|i| self.last_results.get(i)) {
            Some(result) => Response::Detail(presenter::format_match(result)),
            None => {
                warn!("Selection {} out of range (1..={})", index, available);
                Response::InvalidSelection { index, available }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Recipe;
    use crate::matcher::PartialRatio;

    fn catalog() -> RecipeCatalog {
        RecipeCatalog::from_recipes(vec![
            Recipe {
                id: 1,
                name: "omelette".to_string(),
                minutes: 10,
                ingredients: vec!["eggs".to_string(), "butter".to_string()],
                steps: vec!["beat eggs".to_string(), "fry".to_string()],
                ingredient_count: 2,
            },
            Recipe {
                id: 2,
                name: "toast".to_string(),
                minutes: 5,
                ingredients: vec!["bread".to_string(), "butter".to_string()],
                steps: vec!["toast bread".to_string()],
                ingredient_count: 2,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(Request::parse_query("  QUIT "), Request::Quit);
        assert_eq!(Request::parse_query("exit"), Request::Quit);
        assert_eq!(
            Request::parse_query(" eggs "),
            Request::Search("eggs".to_string())
        );
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(Request::parse_selection("2"), Request::Select(2));
        assert_eq!(Request::parse_selection(" 10\n"), Request::Select(10));
        assert_eq!(Request::parse_selection("back"), Request::Back);
        assert_eq!(Request::parse_selection(""), Request::Back);
        assert_eq!(Request::parse_selection("-1"), Request::Back);
        assert_eq!(Request::parse_selection("1.5"), Request::Back);
    }

    #[test]
    fn test_search_then_select() {
        let catalog = catalog();
        let extractor = TermExtractor::with_lexicon().unwrap();
        let engine = MatchEngine::new(PartialRatio::new());
        let mut session = Session::new(&catalog, &extractor, &engine, 5);

        let response = session
            .handle(Request::Search("I have eggs and butter".to_string()))
            .unwrap();
        match response {
            Response::Matches { terms, results } => {
                assert_eq!(terms.len(), 2);
                assert_eq!(results[0].recipe.id, 1);
                assert_eq!(results[0].score, 2);
                assert_eq!(results[1].recipe.id, 2);
            }
            other => panic!("expected matches, got {other:?}"),
        }

        match session.handle(Request::Select(2)).unwrap() {
            Response::Detail(text) => assert!(text.contains("Recipe: toast (ID: 2)")),
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_selection() {
        let catalog = catalog();
        let extractor = TermExtractor::with_lexicon().unwrap();
        let engine = MatchEngine::new(PartialRatio::new());
        let mut session = Session::new(&catalog, &extractor, &engine, 5);

        assert_eq!(
            session.handle(Request::Select(1)).unwrap(),
            Response::InvalidSelection {
                index: 1,
                available: 0
            }
        );

        session
            .handle(Request::Search("bread".to_string()))
            .unwrap();
        assert_eq!(
            session.handle(Request::Select(0)).unwrap(),
            Response::InvalidSelection {
                index: 0,
                available: 1
            }
        );
    }

    #[test]
    fn test_no_matches_and_back() {
        let catalog = catalog();
        let extractor = TermExtractor::with_lexicon().unwrap();
        let engine = MatchEngine::new(PartialRatio::new());
        let mut session = Session::new(&catalog, &extractor, &engine, 5);

        match session
            .handle(Request::Search("shrimp".to_string()))
            .unwrap()
        {
            Response::NoMatches { terms } => assert!(terms.contains("shrimp")),
            other => panic!("expected no matches, got {other:?}"),
        }

        session.handle(Request::Search("bread".to_string())).unwrap();
        assert!(!session.last_results().is_empty());
        assert_eq!(session.handle(Request::Back).unwrap(), Response::Cleared);
        assert!(session.last_results().is_empty());
        assert_eq!(session.handle(Request::Quit).unwrap(), Response::Quit);
    }
}

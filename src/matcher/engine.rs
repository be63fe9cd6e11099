use crate::catalog::Recipe;
use crate::matcher::similarity::{PartialRatio, Similarity};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// A recipe paired with the number of query terms it satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub recipe: Arc<Recipe>,
    pub score: usize,
}

/// Scores recipes by ingredient overlap with a term set.
#[derive(Debug, Clone)]
pub struct MatchEngine<S = PartialRatio> {
    scorer: S,
}

impl MatchEngine<PartialRatio> {
    pub fn with_threshold(threshold: u8) -> Self {
        Self::new(PartialRatio::with_threshold(threshold))
    }
}

impl Default for MatchEngine<PartialRatio> {
    fn default() -> Self {
        Self::new(PartialRatio::new())
    }
}

impl<S: Similarity> MatchEngine<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `catalog` against `terms`, best first, at most `limit` results.
    ///
    /// Every recipe is scanned. Recipes with no matching term are dropped and
    /// equal scores keep catalog order.
    pub fn search(
        &self,
        terms: &BTreeSet<String>,
        catalog: &[Arc<Recipe>],
        limit: usize,
    ) -> Vec<MatchResult> {
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut results: Vec<MatchResult> = catalog
            .iter()
            .filter_map(|recipe| {
                let score = self.score_recipe(terms, recipe);
                (score > 0).then(|| MatchResult {
                    recipe: Arc::clone(recipe),
                    score,
                })
            })
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(limit);

        debug!(
            "Matched {} recipes (limit {}) for {} terms",
            results.len(),
            limit,
            terms.len()
        );

        results
    }

    /// Number of terms with at least one similar ingredient
    pub fn score_recipe(&self, terms: &BTreeSet<String>, recipe: &Recipe) -> usize {
        let ingredients: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|ingredient| ingredient.to_lowercase())
            .collect();

        terms
            .iter()
            .filter(|term| {
                ingredients
                    .iter()
                    .any(|ingredient| self.scorer.similar(term, ingredient))
            })
            .count()
    }
}

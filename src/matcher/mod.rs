// Query analysis, fuzzy similarity and ranking

pub mod engine;
pub mod lexicon;
pub mod similarity;
pub mod terms;

// Re-exports
pub use engine::{MatchEngine, MatchResult};
pub use similarity::{partial_ratio, ratio, PartialRatio, Similarity, DEFAULT_THRESHOLD};
pub use terms::{LexiconAnalyzer, PartOfSpeech, TermExtractor, TextAnalyzer, Token};

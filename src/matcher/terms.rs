//! Turning a free-text query into a set of ingredient candidate terms.
//!
//! Linguistic analysis sits behind [`TextAnalyzer`]. The bundled
//! [`LexiconAnalyzer`] tags words with embedded English word lists; any other
//! analyzer (a full POS tagger, say) can be plugged into [`TermExtractor`]
//! without touching the matcher.

use crate::error::{Error, Result};
use crate::matcher::lexicon::{self, ADJECTIVES, ADVERBS, STOP_WORDS, VERBS};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Number,
    Other,
}

impl PartOfSpeech {
    pub fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

/// One analyzed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
    pub lemma: String,
}

/// Per-token part-of-speech, stop-word flag and lemma for a piece of text.
pub trait TextAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Token>>;
}

/// Word-list based analyzer for short English ingredient queries.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    token_re: Regex,
    stop_words: HashSet<String>,
    verbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
}

impl LexiconAnalyzer {
    pub fn new() -> Result<Self> {
        let token_re = Regex::new(r"\p{Alphabetic}+(?:[-'\x{2019}]\p{Alphabetic}+)*|\p{Nd}+(?:[.,/]\p{Nd}+)*")
            .map_err(|e| Error::Extraction(format!("Failed to build tokenizer: {e}")))?;

        Ok(Self {
            token_re,
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            verbs: VERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
        })
    }

    /// Treat additional words as stop-words
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    fn classify(&self, word: &str) -> (PartOfSpeech, bool) {
        if word.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '/')) {
            return (PartOfSpeech::Number, false);
        }
        if self.stop_words.contains(word) {
            return (PartOfSpeech::Other, true);
        }

        let pos = if self.verbs.contains(word) {
            PartOfSpeech::Verb
        } else if self.adjectives.contains(word) {
            PartOfSpeech::Adjective
        } else if self.adverbs.contains(word) {
            PartOfSpeech::Adverb
        } else {
            PartOfSpeech::Noun
        };

        (pos, false)
    }
}

impl TextAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self
            .token_re
            .find_iter(text)
            .flat_map(|m| {
                // "don't" -> "do", "n't"
                let (head, clitic) = lexicon::split_clitic(&m.as_str().to_lowercase());
                std::iter::once(head).chain(clitic.map(str::to_string))
            })
            .map(|word| {
                let (pos, is_stop) = self.classify(&word);
                let lemma = if pos.is_nominal() {
                    lexicon::lemmatize(&word)
                } else {
                    word.clone()
                };

                Token {
                    text: word,
                    pos,
                    is_stop,
                    lemma,
                }
            })
            .collect();

        Ok(tokens)
    }
}

/// Extracts the normalized ingredient terms of a query.
pub struct TermExtractor {
    analyzer: Box<dyn TextAnalyzer + Send + Sync>,
}

impl TermExtractor {
    pub fn new(analyzer: impl TextAnalyzer + Send + Sync + 'static) -> Self {
        Self {
            analyzer: Box::new(analyzer),
        }
    }

    /// Extractor backed by the bundled [`LexiconAnalyzer`]
    pub fn with_lexicon() -> Result<Self> {
        Ok(Self::new(LexiconAnalyzer::new()?))
    }

    /// Lower-cased, lemmatized, non-stop-word nouns of `text`
    pub fn extract(&self, text: &str) -> Result<BTreeSet<String>> {
        let tokens = self.analyzer.analyze(&text.to_lowercase())?;

        let terms: BTreeSet<String> = tokens
            .into_iter()
            .filter(|t| t.pos.is_nominal() && !t.is_stop)
            .map(|t| t.lemma)
            .filter(|lemma| !lemma.is_empty())
            .collect();

        debug!("Extracted {} terms from query: {:?}", terms.len(), terms);
        Ok(terms)
    }
}

impl std::fmt::Debug for TermExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermExtractor").finish_non_exhaustive()
    }
}

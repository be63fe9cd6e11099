//! Fuzzy string similarity used to compare query terms with ingredients.

/// Scores above this count as a match.
pub const DEFAULT_THRESHOLD: u8 = 75;

/// A bounded similarity metric between two short strings.
///
/// Implementations must be pure: the same pair always yields the same score.
/// Inputs are compared as given; callers lower-case beforehand.
pub trait Similarity {
    /// Similarity in `0..=100`
    fn score(&self, a: &str, b: &str) -> u8;

    /// Threshold that `score` has to strictly exceed
    fn threshold(&self) -> u8 {
        DEFAULT_THRESHOLD
    }

    fn similar(&self, a: &str, b: &str) -> bool {
        self.score(a, b) > self.threshold()
    }
}

/// Substring-tolerant ratio: the shorter string is slid across the longer
/// one and the best aligned window decides the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialRatio {
    threshold: u8,
}

impl PartialRatio {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(100),
        }
    }
}

impl Default for PartialRatio {
    fn default() -> Self {
        Self::new()
    }
}

impl Similarity for PartialRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        partial_ratio(a, b)
    }

    fn threshold(&self) -> u8 {
        self.threshold
    }
}

/// Normalized Levenshtein similarity of two strings in `0..=100`.
/// Empty input scores 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_percent(strsim::normalized_levenshtein(a, b))
}

/// Best `ratio` of the shorter string against any same-length window of the
/// longer one. Empty input scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    if shorter.is_empty() {
        return 0;
    }
    if longer.contains(shorter) {
        return 100;
    }

    let longer: Vec<char> = longer.chars().collect();
    let width = shorter.chars().count();

    let best = longer
        .windows(width)
        .map(|window| {
            let window: String = window.iter().collect();
            strsim::normalized_levenshtein(shorter, &window)
        })
        .fold(0.0_f64, f64::max);

    to_percent(best)
}

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

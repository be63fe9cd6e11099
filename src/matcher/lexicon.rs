// Embedded English word lists and the plural lemmatizer used by
// `LexiconAnalyzer`.

/// Function words that never name an ingredient.
pub const STOP_WORDS: &[&str] = &[
    "'d", "'ll", "'m", "'re", "'s", "'ve", "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "bottom", "but", "by", "ca", "call", "can", "cannot", "could", "d", "did",
    "do", "does", "doing", "done", "down", "due", "during", "each", "either", "else",
    "elsewhere", "empty", "enough", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "first", "for", "former", "formerly", "from", "front", "full",
    "further", "get", "give", "go", "had", "has", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just",
    "keep", "last", "latter", "latterly", "least", "less", "ll", "m", "made", "make", "many",
    "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "n't", "name", "namely", "neither", "never",
    "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part", "per",
    "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding", "s", "same",
    "say", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "shall", "she", "should",
    "show", "side", "since", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "t", "take", "than", "that", "the", "their",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "third", "this", "those", "though", "through",
    "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards", "under",
    "unless", "until", "up", "upon", "us", "used", "using", "various", "ve", "very", "via",
    "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
    "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Verbs that commonly appear in ingredient queries.
pub const VERBS: &[&str] = &[
    "add", "bake", "boil", "buy", "chop", "cook", "cooking", "craving", "eat", "eating",
    "find", "fry", "got", "grill", "left", "let", "like", "look", "looking", "love", "mix",
    "need", "prepare", "roast", "saute", "serve", "try", "use", "want", "wanna", "wish",
];

/// Adjectives that describe a dish rather than name an ingredient.
pub const ADJECTIVES: &[&str] = &[
    "big", "cheap", "cold", "creamy", "crispy", "delicious", "easy", "fast", "fresh", "frozen",
    "good", "great", "healthy", "hearty", "hot", "large", "leftover", "light", "little", "low",
    "new", "nice", "old", "quick", "simple", "small", "spicy", "sweet", "tasty", "vegan",
    "vegetarian", "warm",
];

pub const ADVERBS: &[&str] = &[
    "maybe", "quickly", "simply", "today", "tomorrow", "tonight",
];

/// Contraction endings split off into their own token, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'d", "'m", "'s"];

/// Heads that change spelling in front of "n't": "won't" is "wo" + "n't".
const NEGATED_HEADS: &[(&str, &str)] = &[
    ("ai", "am"),
    ("ca", "can"),
    ("sha", "shall"),
    ("wo", "will"),
];

/// Plurals that the suffix rules get wrong.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("brownies", "brownie"),
    ("calories", "calorie"),
    ("calves", "calf"),
    ("children", "child"),
    ("cookies", "cookie"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("shelves", "shelf"),
    ("smoothies", "smoothie"),
    ("teeth", "tooth"),
    ("veggies", "veggie"),
    ("women", "woman"),
];

/// Words that end in `s` without being plural.
const UNCOUNTABLE: &[&str] = &["grits", "molasses"];

/// Reduce a lower-cased noun to its singular base form.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_string();
    }

    if word.chars().count() <= 3 || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return format!("{stem}y");
        }
    }

    if let Some(stem) = word.strip_suffix("oes") {
        if stem.chars().count() >= 3 {
            return format!("{stem}o");
        }
    }

    for suffix in ["ches", "shes", "xes", "zes", "sses"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

/// Split a trailing contraction or possessive off a lower-cased word.
///
/// Curly apostrophes are folded to `'`. Returns the head and the clitic, if
/// any: "don't" gives ("do", "n't"), "baker's" gives ("baker", "'s").
pub fn split_clitic(word: &str) -> (String, Option<&'static str>) {
    let word = word.replace('\u{2019}', "'");

    for &clitic in CLITICS {
        let Some(head) = word.strip_suffix(clitic) else {
            continue;
        };
        if head.is_empty() {
            continue;
        }

        let head = match NEGATED_HEADS.iter().find(|(short, _)| *short == head) {
            Some((_, full)) if clitic == "n't" => (*full).to_string(),
            _ => head.to_string(),
        };
        return (head, Some(clitic));
    }

    (word, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemmatize("eggs"), "egg");
        assert_eq!(lemmatize("onions"), "onion");
        assert_eq!(lemmatize("sauces"), "sauce");
        assert_eq!(lemmatize("olives"), "olive");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(lemmatize("berries"), "berry");
        assert_eq!(lemmatize("tomatoes"), "tomato");
        assert_eq!(lemmatize("peaches"), "peach");
        assert_eq!(lemmatize("radishes"), "radish");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("glasses"), "glass");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemmatize("leaves"), "leaf");
        assert_eq!(lemmatize("cookies"), "cookie");
        assert_eq!(lemmatize("knives"), "knife");
    }

    #[test]
    fn test_words_left_alone() {
        assert_eq!(lemmatize("hummus"), "hummus");
        assert_eq!(lemmatize("asparagus"), "asparagus");
        assert_eq!(lemmatize("molasses"), "molasses");
        assert_eq!(lemmatize("butter"), "butter");
        assert_eq!(lemmatize("peas"), "pea");
        assert_eq!(lemmatize("gas"), "gas");
    }

    #[test]
    fn test_split_contractions() {
        assert_eq!(split_clitic("don't"), ("do".to_string(), Some("n't")));
        assert_eq!(split_clitic("haven't"), ("have".to_string(), Some("n't")));
        assert_eq!(split_clitic("won't"), ("will".to_string(), Some("n't")));
        assert_eq!(split_clitic("can\u{2019}t"), ("can".to_string(), Some("n't")));
        assert_eq!(split_clitic("i'll"), ("i".to_string(), Some("'ll")));
    }

    #[test]
    fn test_split_possessive_and_plain_words() {
        assert_eq!(split_clitic("baker's"), ("baker".to_string(), Some("'s")));
        assert_eq!(split_clitic("o'brien"), ("o'brien".to_string(), None));
        assert_eq!(split_clitic("wonton"), ("wonton".to_string(), None));
    }

    #[test]
    fn test_clitics_are_stop_words() {
        for clitic in CLITICS {
            assert!(STOP_WORDS.contains(clitic), "{clitic} is not a stop-word");
        }
    }

    #[test]
    fn test_word_lists_are_lowercase() {
        for word in STOP_WORDS.iter().chain(VERBS).chain(ADJECTIVES).chain(ADVERBS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}

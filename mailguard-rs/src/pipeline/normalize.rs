//! Text normalization
//!
//! Pure, deterministic raw-text -> normalized-document pipeline:
//! lowercase, strip URLs and email addresses, strip everything that is
//! not an ASCII letter, tokenize, drop stopwords and short tokens,
//! stem, rejoin. The output feeds the vectorizer unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:http|www)\S+").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());
static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Fixed English stopword set (apostrophes already stripped upstream,
/// so contractions appear in their joined form)
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "youre", "youve",
        "youll", "youd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
        "she", "shes", "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
        "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "thatll", "these",
        "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
        "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
        "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
        "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then",
        "once", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
        "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
        "so", "than", "too", "very", "can", "will", "just", "dont", "should", "shouldve", "now",
        "aint", "arent", "couldnt", "didnt", "doesnt", "hadnt", "hasnt", "havent", "isnt",
        "mightnt", "mustnt", "neednt", "shant", "shouldnt", "wasnt", "werent", "wont", "wouldnt",
    ]
    .iter()
    .copied()
    .collect()
});

/// Minimum surviving token length (exclusive)
const MIN_TOKEN_LENGTH: usize = 2;

fn create_stemmer() -> Stemmer {
    Stemmer::create(Algorithm::English)
}

/// Normalize raw email text into a space-joined document of stemmed
/// tokens. An empty result means the input carried no meaningful
/// content; the caller treats that as terminal.
pub fn normalize(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL_RE.replace_all(&text, "");
    let text = EMAIL_RE.replace_all(&text, "");
    let text = NON_LETTER_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = text.trim();

    let stemmer = create_stemmer();

    text.unicode_words()
        .filter(|w| !STOPWORDS.contains(w) && w.len() > MIN_TOKEN_LENGTH)
        .map(|w| stemmer.stem(w).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

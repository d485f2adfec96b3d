//! TF-IDF vectorization of plot overviews, backed by `aprender`.
//!
//! Overviews are split into runs of two or more word characters, lower-cased,
//! stripped of English stop words and weighted by aprender's `TfidfVectorizer`.

use aprender::{
    error::AprenderError,
    primitives::Vector,
    text::{vectorize::TfidfVectorizer, Tokenizer},
};
use regex::Regex;

use crate::error::AppResult;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Tokenizer keeping word-character runs of length two or more
///
/// Punctuation and single letters are dropped rather than becoming terms.
#[derive(Debug, Clone)]
pub struct WordPatternTokenizer {
    pattern: Regex,
}

impl WordPatternTokenizer {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
        })
    }
}

impl Tokenizer for WordPatternTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, AprenderError> {
        Ok(self
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }
}

/// TF-IDF vectors for a set of overviews
pub struct OverviewVectors {
    /// One weighted term vector per overview, in input order
    pub vectors: Vec<Vector<f64>>,
    pub vocabulary_size: usize,
}

/// Fits TF-IDF over `overviews` and returns one vector per overview
///
/// When no overview contributes a term (all blank or all stop words) every
/// vector is empty.
pub fn vectorize_overviews<S: AsRef<str>>(overviews: &[S]) -> AppResult<OverviewVectors> {
    let mut vectorizer = TfidfVectorizer::new()
        .with_tokenizer(Box::new(WordPatternTokenizer::new()?))
        .with_stop_words_english();

    vectorizer.fit(overviews)?;
    let vocabulary_size = vectorizer.vocabulary_size();
    if vocabulary_size == 0 {
        return Ok(OverviewVectors {
            vectors: overviews.iter().map(|_| Vector::from_vec(Vec::new())).collect(),
            vocabulary_size,
        });
    }

    let weights = vectorizer.transform(overviews)?;
    let vectors = (0..weights.n_rows()).map(|row| weights.row(row)).collect();

    Ok(OverviewVectors {
        vectors,
        vocabulary_size,
    })
}

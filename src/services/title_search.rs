use crate::models::{Movie, RECOMMENDATION_COUNT};

/// Characters of the query used as the match fragment
const FRAGMENT_LEN: usize = 3;

/// "Did you mean" suggestions for a title that did not resolve
///
/// Takes the first three characters of the lower-cased query and returns up
/// to five titles containing that fragment anywhere, in catalog order. The
/// fragment is matched literally. An empty query yields no suggestions.
pub fn suggest(catalog: &[Movie], title: &str) -> Vec<String> {
    let fragment: String = title.to_lowercase().chars().take(FRAGMENT_LEN).collect();
    if fragment.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&fragment))
        .take(RECOMMENDATION_COUNT)
        .map(|movie| movie.title.clone())
        .collect()
}

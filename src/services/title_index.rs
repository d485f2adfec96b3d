use std::collections::HashMap;

use crate::models::Movie;

/// Maps lower-cased titles to catalog row positions
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: HashMap<String, usize>,
}

impl TitleIndex {
    /// Builds the index. Duplicate titles keep their first row.
    pub fn build(catalog: &[Movie]) -> Self {
        let mut rows = HashMap::with_capacity(catalog.len());
        for (row, movie) in catalog.iter().enumerate() {
            rows.entry(normalize(&movie.title)).or_insert(row);
        }

        let duplicates = catalog.len() - rows.len();
        if duplicates > 0 {
            tracing::debug!(duplicates, "Collapsed duplicate titles");
        }

        Self { rows }
    }

    /// Resolves a title case-insensitively
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.rows.get(&normalize(title)).copied()
    }
}

fn normalize(title: &str) -> String {
    title.to_lowercase()
}

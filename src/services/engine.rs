use std::path::Path;

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::{CatalogStats, Movie, RecommendationResponse, RECOMMENDATION_COUNT},
    services::{
        catalog, recommendations, similarity::SimilarityMatrix, title_index::TitleIndex,
        title_search,
    },
};

const EMPTY_INPUT_MESSAGE: &str = "Please enter a movie name first!";

/// The loaded catalog together with its similarity matrix and title index
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug)]
pub struct Engine {
    catalog: Vec<Movie>,
    matrix: SimilarityMatrix,
    index: TitleIndex,
    built_at: DateTime<Utc>,
}

impl Engine {
    /// Loads the catalog CSV and builds the index
    pub fn initialize(path: impl AsRef<Path>) -> AppResult<Self> {
        let movies = catalog::load_catalog(path)?;
        Self::from_catalog(movies)
    }

    /// Builds the engine from an in-memory catalog
    pub fn from_catalog(catalog: Vec<Movie>) -> AppResult<Self> {
        let matrix = SimilarityMatrix::build(&catalog)?;
        let index = TitleIndex::build(&catalog);

        Ok(Self {
            catalog,
            matrix,
            index,
            built_at: Utc::now(),
        })
    }

    /// Resolves a title to its row position
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.index.resolve(title)
    }

    /// Suggestions for a title that does not resolve
    pub fn suggest(&self, title: &str) -> Vec<String> {
        title_search::suggest(&self.catalog, title)
    }

    /// Runs one request through resolve, then rank or suggest
    pub fn handle(&self, query: &str) -> RecommendationResponse {
        if query.trim().is_empty() {
            return RecommendationResponse::EmptyInput {
                message: EMPTY_INPUT_MESSAGE.to_string(),
            };
        }

        match self.resolve(query) {
            Some(row) => {
                let recommendations = recommendations::recommend(&self.matrix, &self.catalog, row);
                tracing::debug!(query, row, count = recommendations.len(), "Title resolved");
                RecommendationResponse::Recommendations {
                    query: query.to_string(),
                    recommendations,
                }
            }
            None => {
                let suggestions = self.suggest(query);
                tracing::debug!(query, suggestions = suggestions.len(), "Title not found");
                RecommendationResponse::NotFound {
                    query: query.to_string(),
                    message: format!(
                        "Movie '{}' not found. Please check the spelling or try another movie.",
                        query
                    ),
                    suggestions,
                }
            }
        }
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_movies: self.catalog.len(),
            recommendation_count: RECOMMENDATION_COUNT,
            vocabulary_size: self.matrix.vocabulary_size(),
            built_at: self.built_at,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of recommendations returned for every found title
pub const RECOMMENDATION_COUNT: usize = 5;

/// A movie from the catalog. Its identity is its row position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    /// Plot synopsis; empty when the source cell was blank
    #[serde(default)]
    pub overview: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            overview: overview.into(),
        }
    }
}

/// A single ranked recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// 1-based position in the result list
    pub rank: usize,
    pub title: String,
    /// Cosine similarity to the query movie
    pub score: f64,
}

/// Request body for the recommendations endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub title: String,
}

/// The three shapes a recommendation request can resolve to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationResponse {
    Recommendations {
        query: String,
        recommendations: Vec<Recommendation>,
    },
    NotFound {
        query: String,
        message: String,
        suggestions: Vec<String>,
    },
    EmptyInput {
        message: String,
    },
}

/// Response for the suggestion endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionResponse {
    pub query: String,
    pub suggestions: Vec<String>,
}

/// Summary of the loaded catalog and index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_movies: usize,
    pub recommendation_count: usize,
    pub vocabulary_size: usize,
    pub built_at: DateTime<Utc>,
}

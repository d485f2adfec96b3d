use std::time::Instant;

use aprender::text::similarity::pairwise_cosine_similarity;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    services::vectorizer::vectorize_overviews,
};

/// Dense N×N cosine similarity matrix over catalog overviews, row-major
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
    vocabulary_size: usize,
}

impl SimilarityMatrix {
    /// Vectorizes every overview with TF-IDF and computes all pairwise
    /// cosine similarities. Self-similarity is always 1, blank overviews
    /// included.
    pub fn build(catalog: &[Movie]) -> AppResult<Self> {
        if catalog.is_empty() {
            return Err(AppError::EmptyCatalog);
        }

        let started = Instant::now();
        let overviews: Vec<&str> = catalog.iter().map(|m| m.overview.as_str()).collect();
        let vectorized = vectorize_overviews(&overviews)?;

        let size = catalog.len();
        let mut scores = Vec::with_capacity(size * size);
        if vectorized.vocabulary_size == 0 {
            scores.resize(size * size, 0.0);
        } else {
            for row in pairwise_cosine_similarity(&vectorized.vectors)? {
                scores.extend(row);
            }
        }
        for i in 0..size {
            scores[i * size + i] = 1.0;
        }

        tracing::info!(
            movie_count = size,
            vocabulary_size = vectorized.vocabulary_size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Similarity index built"
        );

        Ok(Self {
            size,
            scores,
            vocabulary_size: vectorized.vocabulary_size,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Similarity scores of `row` against every movie, or `None` if out of range
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.size {
            return None;
        }
        Some(&self.scores[row * self.size..(row + 1) * self.size])
    }
}

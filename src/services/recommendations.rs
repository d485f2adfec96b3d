use std::cmp::Ordering;

use crate::{
    models::{Movie, Recommendation, RECOMMENDATION_COUNT},
    services::similarity::SimilarityMatrix,
};

/// Ranks every other movie by overview similarity to `row`
///
/// Scores are sorted descending with a stable sort, so ties keep catalog
/// order. The query row is excluded by position rather than by assuming it
/// ranks first. Returns at most `RECOMMENDATION_COUNT` entries, or nothing
/// when `row` is out of range.
pub fn recommend(matrix: &SimilarityMatrix, catalog: &[Movie], row: usize) -> Vec<Recommendation> {
    let Some(scores) = matrix.row(row) else {
        return Vec::new();
    };

    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(col, _)| col != row)
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .filter_map(|(col, score)| catalog.get(col).map(|movie| (movie, score)))
        .take(RECOMMENDATION_COUNT)
        .enumerate()
        .map(|(i, (movie, score))| Recommendation {
            rank: i + 1,
            title: movie.title.clone(),
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(catalog: &[Movie]) -> SimilarityMatrix {
        SimilarityMatrix::build(catalog).unwrap()
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_ranks_shared_vocabulary_first() {
        let catalog = vec![
            Movie::new("A", "space odyssey robots"),
            Movie::new("B", "space robots travel"),
            Movie::new("C", "cooking recipes baking"),
        ];
        let matrix = build(&catalog);

        let recs = recommend(&matrix, &catalog, 0);

        assert_eq!(titles(&recs), vec!["B", "C"]);
        assert_eq!(recs[0].rank, 1);
        assert!(recs[0].score > recs[1].score);
    }

    #[test]
    fn test_never_includes_query_and_caps_at_five() {
        let catalog: Vec<Movie> = (0..9)
            .map(|i| Movie::new(format!("Movie {}", i), "a detective solves a murder"))
            .collect();
        let matrix = build(&catalog);

        for row in 0..catalog.len() {
            let recs = recommend(&matrix, &catalog, row);
            assert_eq!(recs.len(), 5);
            assert!(recs.iter().all(|r| r.title != catalog[row].title));
        }
    }

    #[test]
    fn test_small_catalog_returns_fewer() {
        let catalog = vec![
            Movie::new("Alien", "crew fights alien aboard ship"),
            Movie::new("Aliens", "marines fight alien colony"),
            Movie::new("Up", "old man ties balloons to house"),
        ];
        let matrix = build(&catalog);

        assert_eq!(recommend(&matrix, &catalog, 1).len(), 2);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            Movie::new("Query", "pirates treasure"),
            Movie::new("First", "gardening"),
            Movie::new("Second", "knitting"),
            Movie::new("Third", "pirates treasure"),
        ];
        let matrix = build(&catalog);

        let recs = recommend(&matrix, &catalog, 0);

        assert_eq!(titles(&recs), vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_duplicate_overview_tied_at_one_is_kept() {
        let catalog = vec![
            Movie::new("Twin", "identical plot text"),
            Movie::new("Twin", "identical plot text"),
            Movie::new("Other", "completely unrelated words"),
        ];
        let matrix = build(&catalog);

        let recs = recommend(&matrix, &catalog, 1);

        assert_eq!(titles(&recs), vec!["Twin", "Other"]);
    }

    #[test]
    fn test_out_of_range_row_is_empty() {
        let catalog = vec![Movie::new("Solo", "alone")];
        let matrix = build(&catalog);
        assert!(recommend(&matrix, &catalog, 3).is_empty());
    }
}

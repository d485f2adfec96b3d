use std::{fs::File, io::Read, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

const TITLE_COLUMN: &str = "title";
const OVERVIEW_COLUMN: &str = "overview";

/// Loads the movie catalog from a CSV file on disk
///
/// The file must have a header row containing `title` and `overview`.
/// Other columns are ignored. Row order is preserved.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Vec<Movie>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| AppError::CatalogLoad(format!("{}: {}", path.display(), e)))?;

    let movies = load_catalog_from_reader(file)?;

    tracing::info!(
        path = %path.display(),
        movie_count = movies.len(),
        "Catalog loaded"
    );

    Ok(movies)
}

/// Loads the movie catalog from any CSV source
pub fn load_catalog_from_reader<R: Read>(reader: R) -> AppResult<Vec<Movie>> {
    // Flexible: short rows are kept with blank trailing cells
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let title_idx = column_index(&headers, TITLE_COLUMN)?;
    let overview_idx = column_index(&headers, OVERVIEW_COLUMN)?;

    let mut movies = Vec::new();
    for result in reader.records() {
        let row = result?;
        // Missing cells become empty strings so row positions match the source
        let title = row.get(title_idx).unwrap_or_default().to_string();
        let overview = row.get(overview_idx).unwrap_or_default().to_string();
        movies.push(Movie { title, overview });
    }

    Ok(movies)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> AppResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| AppError::CatalogLoad(format!("missing required column `{}`", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_preserves_row_order_and_ignores_extra_columns() {
        let csv = "budget,title,overview,popularity\n\
                   100,Avatar,A paraplegic marine on Pandora,150.4\n\
                   200,Inception,\"A thief who steals secrets, through dreams\",167.5\n";

        let movies = load_catalog_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Avatar");
        assert_eq!(movies[1].title, "Inception");
        assert_eq!(
            movies[1].overview,
            "A thief who steals secrets, through dreams"
        );
    }

    #[test]
    fn test_blank_overview_becomes_empty_string() {
        let csv = "title,overview\nSilent Film,\nTalkie,Words everywhere\n";

        let movies = load_catalog_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(movies[0].overview, "");
        assert_eq!(movies[1].overview, "Words everywhere");
    }

    #[test]
    fn test_short_row_is_kept_with_blank_overview() {
        let csv = "title,overview\nAvatar,Blue people\nSilent Film\nUp,Balloons\n";

        let movies = load_catalog_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(movies.len(), 3);
        assert_eq!(movies[1], Movie::new("Silent Film", ""));
        assert_eq!(movies[2], Movie::new("Up", "Balloons"));
    }

    #[test]
    fn test_missing_overview_column_fails() {
        let csv = "title,tagline\nAvatar,Enter the world\n";

        let result = load_catalog_from_reader(csv.as_bytes());

        assert!(matches!(result, Err(AppError::CatalogLoad(msg)) if msg.contains("overview")));
    }

    #[test]
    fn test_header_only_yields_empty_catalog() {
        let movies = load_catalog_from_reader("title,overview\n".as_bytes()).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title,overview").unwrap();
        writeln!(file, "Interstellar,Explorers travel through a wormhole").unwrap();

        let movies = load_catalog(file.path()).unwrap();

        assert_eq!(movies, vec![Movie::new("Interstellar", "Explorers travel through a wormhole")]);
    }

    #[test]
    fn test_missing_file_fails() {
        let result = load_catalog("/definitely/not/here/movies.csv");
        assert!(matches!(result, Err(AppError::CatalogLoad(_))));
    }
}

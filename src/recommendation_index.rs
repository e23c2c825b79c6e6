//! Fixed-category classification of normalized movies.

use std::collections::HashMap;

use crate::movie_normalizer::Movie;

/// Every genre OMDb reports across the nominee set.
pub const GENRES: [&str; 23] = [
    "Mystery",
    "Film-Noir",
    "Sci-Fi",
    "Western",
    "Romance",
    "Music",
    "Animation",
    "Thriller",
    "Crime",
    "History",
    "Biography",
    "Family",
    "Adventure",
    "Sport",
    "Drama",
    "Documentary",
    "Action",
    "Musical",
    "Horror",
    "Short",
    "Comedy",
    "War",
    "Fantasy",
];

/// Inclusive IMDb rating buckets. Ratings below 5, including the 0
/// sentinel for "no rating", fall outside every bucket.
pub const RATING_BUCKETS: [&str; 5] = ["5-6", "6-7", "7-8", "8-9", "9-10"];

/// Inclusive release-year buckets spanning the first through the most
/// recent ceremony.
pub const YEAR_BUCKETS: [&str; 9] = [
    "1927-1937",
    "1938-1948",
    "1949-1959",
    "1960-1970",
    "1971-1981",
    "1982-1992",
    "1993-2003",
    "2004-2014",
    "2015-2022",
];

fn bucket_bounds(bucket: &str) -> Option<(f64, f64)> {
    let (lo, hi) = bucket.split_once('-')?;
    Some((lo.parse().ok()?, hi.parse().ok()?))
}

/// Three-level lookup keyed by the category strings themselves:
/// genre → rating bucket → year bucket → movies.
pub struct RecommendationIndex {
    leaves: HashMap<String, HashMap<String, HashMap<String, Vec<Movie>>>>,
}

impl RecommendationIndex {
    /// Builds the full index by scanning every movie once per leaf.
    ///
    /// A movie lands in a leaf when the leaf's genre appears in its genre
    /// list, its rating and year sit within the inclusive bucket bounds,
    /// and no movie with the same title is in that leaf yet (the source
    /// tables list several films twice). Multi-genre movies fan out
    /// across genre branches.
    pub fn build(movies: &[Movie]) -> Self {
        let mut leaves: HashMap<String, HashMap<String, HashMap<String, Vec<Movie>>>> =
            HashMap::new();
        for genre in GENRES {
            let mut by_rating = HashMap::new();
            for rating_bucket in RATING_BUCKETS {
                let Some((rating_lo, rating_hi)) = bucket_bounds(rating_bucket) else {
                    continue;
                };
                let mut by_year = HashMap::new();
                for year_bucket in YEAR_BUCKETS {
                    let Some((year_lo, year_hi)) = bucket_bounds(year_bucket) else {
                        continue;
                    };
                    let (year_lo, year_hi) = (year_lo as i32, year_hi as i32);
                    let mut leaf: Vec<Movie> = Vec::new();
                    for movie in movies {
                        let matches = movie.genres.iter().any(|name| name == genre)
                            && movie.rating >= rating_lo
                            && movie.rating <= rating_hi
                            && movie.year >= year_lo
                            && movie.year <= year_hi
                            && !leaf.iter().any(|kept| kept.title == movie.title);
                        if matches {
                            leaf.push(movie.clone());
                        }
                    }
                    by_year.insert(year_bucket.to_string(), leaf);
                }
                by_rating.insert(rating_bucket.to_string(), by_year);
            }
            leaves.insert(genre.to_string(), by_rating);
        }
        Self { leaves }
    }

    /// Returns the leaf for an exact category triple, or `None` when any
    /// key is not one of the enumerated category strings.
    pub fn movies_for(
        &self,
        genre: &str,
        rating_bucket: &str,
        year_bucket: &str,
    ) -> Option<&[Movie]> {
        self.leaves
            .get(genre)?
            .get(rating_bucket)?
            .get(year_bucket)
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::{RecommendationIndex, GENRES, RATING_BUCKETS, YEAR_BUCKETS};
    use crate::movie_normalizer::Movie;

    fn movie(title: &str, genres: &[&str], rating: f64, year: i32) -> Movie {
        Movie {
            title: title.to_string(),
            year,
            genres: genres.iter().map(|name| name.to_string()).collect(),
            rating,
            box_office: 0,
            plot: String::new(),
            imdb_id: String::new(),
        }
    }

    fn leaves_holding(index: &RecommendationIndex, title: &str) -> Vec<(String, String, String)> {
        let mut found = Vec::new();
        for genre in GENRES {
            for rating_bucket in RATING_BUCKETS {
                for year_bucket in YEAR_BUCKETS {
                    let leaf = index
                        .movies_for(genre, rating_bucket, year_bucket)
                        .expect("enumerated triple should resolve");
                    if leaf.iter().any(|movie| movie.title == title) {
                        found.push((
                            genre.to_string(),
                            rating_bucket.to_string(),
                            year_bucket.to_string(),
                        ));
                    }
                }
            }
        }
        found
    }

    #[test]
    fn test_multi_genre_movie_fans_out_to_exactly_its_leaves() {
        let movies = vec![movie("Titanic", &["Drama", "Romance"], 8.1, 1997)];
        let index = RecommendationIndex::build(&movies);
        let mut found = leaves_holding(&index, "Titanic");
        found.sort();
        assert_eq!(
            found,
            vec![
                (
                    "Drama".to_string(),
                    "8-9".to_string(),
                    "1993-2003".to_string()
                ),
                (
                    "Romance".to_string(),
                    "8-9".to_string(),
                    "1993-2003".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_duplicate_titles_appear_once_per_leaf() {
        let movies = vec![
            movie("Cimarron", &["Western"], 5.8, 1931),
            movie("Cimarron", &["Western"], 5.8, 1931),
        ];
        let index = RecommendationIndex::build(&movies);
        let leaf = index
            .movies_for("Western", "5-6", "1927-1937")
            .expect("enumerated triple should resolve");
        assert_eq!(leaf.len(), 1);
    }

    #[test]
    fn test_rating_zero_movie_is_absent_from_every_leaf() {
        let movies = vec![movie("Unrated Film", &["Drama"], 0.0, 1950)];
        let index = RecommendationIndex::build(&movies);
        assert!(leaves_holding(&index, "Unrated Film").is_empty());
    }

    #[test]
    fn test_bucket_bounds_are_inclusive_on_both_ends() {
        let movies = vec![movie("Edge Case", &["Drama"], 6.0, 1948)];
        let index = RecommendationIndex::build(&movies);
        let found = leaves_holding(&index, "Edge Case");
        // Rating 6.0 closes "5-6" and opens "6-7"; year 1948 closes "1938-1948".
        assert!(found.contains(&(
            "Drama".to_string(),
            "5-6".to_string(),
            "1938-1948".to_string()
        )));
        assert!(found.contains(&(
            "Drama".to_string(),
            "6-7".to_string(),
            "1938-1948".to_string()
        )));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_unenumerated_keys_resolve_to_none() {
        let index = RecommendationIndex::build(&[]);
        assert!(index.movies_for("Telenovela", "5-6", "1927-1937").is_none());
        assert!(index.movies_for("Drama", "4-5", "1927-1937").is_none());
        assert!(index.movies_for("Drama", "5-6", "1900-1910").is_none());
    }
}

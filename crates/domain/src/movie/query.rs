use std::cmp::Ordering;

use crate::query::{Queryable, TextFilter, compare_text, exact_matches, text_matches};

use super::Movie;

/// Filters accepted by `GET /movies`.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub director: Option<TextFilter>,
    pub genre: Option<TextFilter>,
    pub year: Option<i32>,
}

impl MovieFilter {
    pub fn new(director: Option<&str>, genre: Option<&str>, year: Option<i32>) -> Self {
        Self {
            director: TextFilter::new(director),
            genre: TextFilter::new(genre),
            year,
        }
    }
}

/// Sort keys accepted by `GET /movies`. Ties always fall back to title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovieSort {
    #[default]
    Title,
    Year,
    Director,
}

impl MovieSort {
    /// Maps a `sort` parameter to a key; unknown names use the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("year") => MovieSort::Year,
            Some("director") => MovieSort::Director,
            _ => MovieSort::Title,
        }
    }
}

impl Queryable for Movie {
    type Filter = MovieFilter;
    type Sort = MovieSort;

    fn matches(&self, filter: &MovieFilter) -> bool {
        text_matches(&filter.director, &self.director)
            && text_matches(&filter.genre, &self.genre)
            && exact_matches(&filter.year, &self.year)
    }

    fn compare(&self, other: &Self, sort: MovieSort) -> Ordering {
        let primary = match sort {
            MovieSort::Title => Ordering::Equal,
            MovieSort::Year => self.year.cmp(&other.year),
            MovieSort::Director => compare_text(&self.director, &other.director),
        };
        primary.then_with(|| compare_text(&self.title, &other.title))
    }
}

use entity_store::EntityStore;

use crate::service::ResourceService;

use super::Movie;

/// Last release year that still counts as classic.
pub const CLASSIC_CUTOFF_YEAR: i32 = 1995;

/// Release era used by `GET /movies/era/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    /// Released in or before [`CLASSIC_CUTOFF_YEAR`].
    Classic,
    /// Released after [`CLASSIC_CUTOFF_YEAR`].
    Modern,
}

impl Era {
    /// Parses an era name case-insensitively.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Era::Classic),
            "modern" => Some(Era::Modern),
            _ => None,
        }
    }

    pub fn includes(&self, year: i32) -> bool {
        match self {
            Era::Classic => year <= CLASSIC_CUTOFF_YEAR,
            Era::Modern => year > CLASSIC_CUTOFF_YEAR,
        }
    }
}

impl<S: EntityStore<Movie>> ResourceService<Movie, S> {
    /// Returns the movies of an era in store order.
    ///
    /// An unknown era name selects nothing.
    #[tracing::instrument(skip(self))]
    pub async fn by_era(&self, kind: &str) -> Vec<Movie> {
        match Era::parse(kind) {
            Some(era) => self.select(|m| era.includes(m.year)).await,
            None => {
                tracing::debug!("unknown era");
                Vec::new()
            }
        }
    }
}

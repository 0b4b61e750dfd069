use common::EntityId;
use entity_store::Entity;
use serde::{Deserialize, Serialize};

use crate::DomainError;
use crate::resource::Resource;
use crate::validate::{self, same_text, trim_opt};

/// Nothing released before this year counts as a film.
pub const EARLIEST_FILM_YEAR: i32 = 1888;

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: EntityId,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
}

/// A normalized movie awaiting its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
}

/// Body of `POST /movies`. A missing text field reads as empty and fails
/// validation like a blank one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    pub year: i32,
    #[serde(default)]
    pub genre: String,
}

impl CreateMovie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            year,
            genre: genre.into(),
        }
    }
}

/// Body of `PUT /movies/{id}`. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl Entity for Movie {
    type Draft = MovieDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: MovieDraft) -> Self {
        Self {
            id,
            title: draft.title,
            director: draft.director,
            year: draft.year,
            genre: draft.genre,
        }
    }
}

impl Resource for Movie {
    const NAME: &'static str = "movie";
    const COLLECTION: &'static str = "movies";
    const UNIQUE_KEY: Option<&'static str> = Some("title and director");

    type Create = CreateMovie;
    type Update = UpdateMovie;

    fn validate_create(payload: &CreateMovie) -> Result<(), DomainError> {
        validate::required_text("title", &payload.title)?;
        validate::required_text("director", &payload.director)?;
        validate::at_least("year", payload.year, EARLIEST_FILM_YEAR)
    }

    fn normalize(payload: CreateMovie) -> MovieDraft {
        MovieDraft {
            title: payload.title.trim().to_string(),
            director: payload.director.trim().to_string(),
            year: payload.year,
            genre: payload.genre.trim().to_string(),
        }
    }

    fn validate_update(payload: &UpdateMovie) -> Result<(), DomainError> {
        validate::optional_required_text("title", payload.title.as_deref())?;
        validate::optional_required_text("director", payload.director.as_deref())?;
        if let Some(year) = payload.year {
            validate::at_least("year", year, EARLIEST_FILM_YEAR)?;
        }
        Ok(())
    }

    fn merge(&self, update: UpdateMovie) -> Self {
        Self {
            id: self.id,
            title: trim_opt(update.title).unwrap_or_else(|| self.title.clone()),
            director: trim_opt(update.director).unwrap_or_else(|| self.director.clone()),
            year: update.year.unwrap_or(self.year),
            genre: trim_opt(update.genre).unwrap_or_else(|| self.genre.clone()),
        }
    }

    fn duplicates(&self, draft: &MovieDraft) -> bool {
        same_text(&self.title, &draft.title) && same_text(&self.director, &draft.director)
    }
}

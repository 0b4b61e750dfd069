//! Books.
//!
//! Title uniqueness is enforced or not depending on the service's
//! [`DuplicatePolicy`](crate::DuplicatePolicy); updates are patches.

use std::cmp::Ordering;

use common::EntityId;
use entity_store::Entity;
use serde::{Deserialize, Serialize};

use crate::DomainError;
use crate::query::{Queryable, TextFilter, compare_text, exact_matches, text_matches};
use crate::resource::Resource;
use crate::validate::{self, same_text, trim_opt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub year: i32,
}

impl CreateBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl Entity for Book {
    type Draft = BookDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
        }
    }
}

impl Resource for Book {
    const NAME: &'static str = "book";
    const COLLECTION: &'static str = "books";
    const UNIQUE_KEY: Option<&'static str> = Some("title");

    type Create = CreateBook;
    type Update = UpdateBook;

    fn validate_create(payload: &CreateBook) -> Result<(), DomainError> {
        validate::required_text("title", &payload.title)?;
        validate::non_negative("year", payload.year)
    }

    fn normalize(payload: CreateBook) -> BookDraft {
        BookDraft {
            title: payload.title.trim().to_string(),
            author: payload.author.trim().to_string(),
            year: payload.year,
        }
    }

    fn validate_update(payload: &UpdateBook) -> Result<(), DomainError> {
        validate::optional_required_text("title", payload.title.as_deref())?;
        if let Some(year) = payload.year {
            validate::non_negative("year", year)?;
        }
        Ok(())
    }

    fn merge(&self, update: UpdateBook) -> Self {
        Self {
            id: self.id,
            title: trim_opt(update.title).unwrap_or_else(|| self.title.clone()),
            author: trim_opt(update.author).unwrap_or_else(|| self.author.clone()),
            year: update.year.unwrap_or(self.year),
        }
    }

    fn duplicates(&self, draft: &BookDraft) -> bool {
        same_text(&self.title, &draft.title)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub title: Option<TextFilter>,
    pub author: Option<TextFilter>,
    pub year: Option<i32>,
}

impl BookFilter {
    pub fn new(title: Option<&str>, author: Option<&str>, year: Option<i32>) -> Self {
        Self {
            title: TextFilter::new(title),
            author: TextFilter::new(author),
            year,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookSort {
    #[default]
    Title,
    Author,
    Year,
}

impl BookSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("author") => BookSort::Author,
            Some("year") => BookSort::Year,
            _ => BookSort::Title,
        }
    }
}

impl Queryable for Book {
    type Filter = BookFilter;
    type Sort = BookSort;

    fn matches(&self, filter: &BookFilter) -> bool {
        text_matches(&filter.title, &self.title)
            && text_matches(&filter.author, &self.author)
            && exact_matches(&filter.year, &self.year)
    }

    fn compare(&self, other: &Self, sort: BookSort) -> Ordering {
        let primary = match sort {
            BookSort::Title => Ordering::Equal,
            BookSort::Author => compare_text(&self.author, &other.author),
            BookSort::Year => self.year.cmp(&other.year),
        };
        primary.then_with(|| compare_text(&self.title, &other.title))
    }
}

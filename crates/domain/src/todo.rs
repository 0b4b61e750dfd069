//! Todos.
//!
//! Updates overwrite: both `title` and `is_done` must be sent.

use std::cmp::Ordering;

use common::EntityId;
use entity_store::Entity;
use serde::{Deserialize, Serialize};

use crate::DomainError;
use crate::query::{Queryable, TextFilter, compare_text, exact_matches, text_matches};
use crate::resource::Resource;
use crate::validate::{self, same_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: EntityId,
    pub title: String,
    pub is_done: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: String,
    pub is_done: bool,
}

impl Entity for Todo {
    /// Trimmed title; new todos start open.
    type Draft = String;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, title: String) -> Self {
        Self {
            id,
            title,
            is_done: false,
        }
    }
}

impl Resource for Todo {
    const NAME: &'static str = "todo";
    const COLLECTION: &'static str = "todos";
    const UNIQUE_KEY: Option<&'static str> = Some("title");

    type Create = CreateTodo;
    type Update = UpdateTodo;

    fn validate_create(payload: &CreateTodo) -> Result<(), DomainError> {
        validate::required_text("title", &payload.title).map(|_| ())
    }

    fn normalize(payload: CreateTodo) -> String {
        payload.title.trim().to_string()
    }

    fn validate_update(payload: &UpdateTodo) -> Result<(), DomainError> {
        validate::required_text("title", &payload.title).map(|_| ())
    }

    fn merge(&self, update: UpdateTodo) -> Self {
        Self {
            id: self.id,
            title: update.title.trim().to_string(),
            is_done: update.is_done,
        }
    }

    fn duplicates(&self, title: &String) -> bool {
        same_text(&self.title, title)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub title: Option<TextFilter>,
    pub is_done: Option<bool>,
}

impl TodoFilter {
    pub fn new(title: Option<&str>, is_done: Option<bool>) -> Self {
        Self {
            title: TextFilter::new(title),
            is_done,
        }
    }
}

/// `Id` keeps creation order and is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoSort {
    #[default]
    Id,
    Title,
}

impl TodoSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("title") => TodoSort::Title,
            _ => TodoSort::Id,
        }
    }
}

impl Queryable for Todo {
    type Filter = TodoFilter;
    type Sort = TodoSort;

    fn matches(&self, filter: &TodoFilter) -> bool {
        text_matches(&filter.title, &self.title) && exact_matches(&filter.is_done, &self.is_done)
    }

    fn compare(&self, other: &Self, sort: TodoSort) -> Ordering {
        match sort {
            TodoSort::Id => self.id.cmp(&other.id),
            TodoSort::Title => {
                compare_text(&self.title, &other.title).then_with(|| self.id.cmp(&other.id))
            }
        }
    }
}

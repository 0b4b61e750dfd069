//! Products.
//!
//! No uniqueness rule; updates are patches.

use std::cmp::Ordering;

use common::EntityId;
use entity_store::Entity;
use serde::{Deserialize, Serialize};

use crate::DomainError;
use crate::query::{Queryable, TextFilter, compare_text, text_matches};
use crate::resource::Resource;
use crate::validate::{self, trim_opt};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    #[serde(default)]
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl Entity for Product {
    type Draft = ProductDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }
}

impl Resource for Product {
    const NAME: &'static str = "product";
    const COLLECTION: &'static str = "products";

    type Create = CreateProduct;
    type Update = UpdateProduct;

    fn validate_create(payload: &CreateProduct) -> Result<(), DomainError> {
        validate::required_text("name", &payload.name)?;
        validate::non_negative_amount("price", payload.price)
    }

    fn normalize(payload: CreateProduct) -> ProductDraft {
        ProductDraft {
            name: payload.name.trim().to_string(),
            price: payload.price,
        }
    }

    fn validate_update(payload: &UpdateProduct) -> Result<(), DomainError> {
        validate::optional_required_text("name", payload.name.as_deref())?;
        if let Some(price) = payload.price {
            validate::non_negative_amount("price", price)?;
        }
        Ok(())
    }

    fn merge(&self, update: UpdateProduct) -> Self {
        Self {
            id: self.id,
            name: trim_opt(update.name).unwrap_or_else(|| self.name.clone()),
            price: update.price.unwrap_or(self.price),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<TextFilter>,
}

impl ProductFilter {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: TextFilter::new(name),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Name,
    Price,
}

impl ProductSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("price") => ProductSort::Price,
            _ => ProductSort::Name,
        }
    }
}

impl Queryable for Product {
    type Filter = ProductFilter;
    type Sort = ProductSort;

    fn matches(&self, filter: &ProductFilter) -> bool {
        text_matches(&filter.name, &self.name)
    }

    fn compare(&self, other: &Self, sort: ProductSort) -> Ordering {
        let primary = match sort {
            ProductSort::Name => Ordering::Equal,
            ProductSort::Price => self.price.total_cmp(&other.price),
        };
        primary.then_with(|| compare_text(&self.name, &other.name))
    }
}

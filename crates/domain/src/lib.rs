//! Domain layer for the resource services.
//!
//! This crate provides:
//! - Validator helpers shared by every resource
//! - The query engine behind list endpoints (filter, sort, page)
//! - The `Resource` trait and the four resources: movies, books, todos, products
//! - `ResourceService`, the list/get/create/update/delete command handlers

pub mod book;
pub mod error;
pub mod movie;
pub mod product;
pub mod query;
pub mod resource;
pub mod service;
pub mod todo;
pub mod validate;

pub use book::{Book, BookFilter, BookSort, CreateBook, UpdateBook};
pub use error::DomainError;
pub use movie::{CreateMovie, Era, Movie, MovieFilter, MovieSort, UpdateMovie};
pub use product::{CreateProduct, Product, ProductFilter, ProductSort, UpdateProduct};
pub use query::{ListQuery, Queryable, TextFilter};
pub use resource::{DuplicatePolicy, Resource};
pub use service::ResourceService;
pub use todo::{CreateTodo, Todo, TodoFilter, TodoSort, UpdateTodo};

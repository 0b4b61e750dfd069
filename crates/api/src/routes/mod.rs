pub mod books;
pub mod health;
pub mod metrics;
pub mod movies;
pub mod products;
pub mod resource;
pub mod todos;

use domain::{Book, Movie, Product, ResourceService, Todo};

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub movies: ResourceService<Movie>,
    pub books: ResourceService<Book>,
    pub todos: ResourceService<Todo>,
    pub products: ResourceService<Product>,
}

//! Movies: CRUD, filtered and paged listing, and era selection.

mod era;
mod model;
mod query;

pub use era::{CLASSIC_CUTOFF_YEAR, Era};
pub use model::{CreateMovie, EARLIEST_FILM_YEAR, Movie, MovieDraft, UpdateMovie};
pub use query::{MovieFilter, MovieSort};

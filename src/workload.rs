//! Loading benchmark keys from the horror movie CSV dataset.
//!
//! The dataset has a header line followed by one movie per line. Fields are
//! comma separated; a field wrapped in double quotes may contain commas, and a
//! doubled quote (`""`) inside it stands for a literal quote.

mod loader;
mod movie;

pub use loader::{load_movies, load_titles};
pub use movie::Movie;

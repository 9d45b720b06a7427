pub mod traits;
pub mod genres;
pub mod tmdb;
pub mod error;

pub use traits::MovieCatalog;
pub use genres::{genre_ids_to_names, genre_name, UNKNOWN_GENRE};
pub use tmdb::{resolve_poster_url, TmdbClient, UNKNOWN_DIRECTOR};
pub use error::LookupError;

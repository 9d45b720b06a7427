pub mod movie;
pub mod rating;
pub mod review;
pub mod statistics;
pub mod view;

pub use movie::{MovieDetails, MovieSearchResult};
pub use rating::{RatingError, StarRating};
pub use review::{DraftError, Review, ReviewDraft};
pub use statistics::ReviewStatistics;
pub use view::{ReviewFilter, SortOrder};

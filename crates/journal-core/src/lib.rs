pub mod clock;
pub mod reducer;
pub mod search;
pub mod stats;
pub mod storage;
pub mod store;
pub mod view;

pub use clock::{Clock, SystemClock};
pub use reducer::{reduce, ReviewAction};
pub use search::{DebouncedSearch, SearchOutcome};
pub use stats::compute_statistics;
pub use storage::{JsonFileStorage, MemoryStorage, ReviewStorage, StorageError};
pub use store::ReviewStore;
pub use view::{all_genres, filter_and_sort, filter_reviews, sort_reviews};

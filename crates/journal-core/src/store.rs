use crate::clock::{Clock, SystemClock};
use crate::reducer::{reduce, ReviewAction};
use crate::storage::ReviewStorage;
use journal_models::{Review, ReviewDraft};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Owner of the review collection.
///
/// Loaded once from storage, then the in-memory collection is the source of
/// truth. Every change is written back as a whole; write failures are logged
/// and the change stays visible in memory.
pub struct ReviewStore<S: ReviewStorage> {
    reviews: Vec<Review>,
    storage: S,
    clock: Box<dyn Clock>,
}

impl<S: ReviewStorage> ReviewStore<S> {
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, Box::new(SystemClock::new()))
    }

    /// Rehydrate from storage; a missing or unreadable snapshot starts empty
    pub fn open_with_clock(storage: S, clock: Box<dyn Clock>) -> Self {
        let initial = match storage.load() {
            Ok(Some(reviews)) => drop_duplicate_ids(reviews),
            Ok(None) => {
                debug!("No stored reviews at {}, starting empty", storage.location());
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to load reviews from {}: {}. Starting with an empty collection.", storage.location(), e);
                Vec::new()
            }
        };

        Self {
            reviews: reduce(Vec::new(), ReviewAction::SetReviews(initial)),
            storage,
            clock,
        }
    }

    /// Add a new review at the front of the collection
    pub fn create(&mut self, draft: ReviewDraft) -> Review {
        let now = self.clock.now();
        let review = Review {
            id: self.next_id(),
            title: draft.title,
            creator_name: draft.creator_name,
            rating: draft.rating,
            content: draft.content,
            poster_url: draft.poster_url,
            tmdb_id: draft.tmdb_id,
            release_year: draft.release_year,
            genres: draft.genres,
            created_at: now,
            updated_at: now,
        };

        info!("Created review {} for {:?}", review.id, review.title);
        self.dispatch(ReviewAction::Create(review.clone()));
        review
    }

    /// Replace every user field of an existing review.
    ///
    /// Unknown ids are ignored and return `None`.
    pub fn update(&mut self, id: &str, draft: ReviewDraft) -> Option<Review> {
        let Some(existing) = self.get(id) else {
            debug!("Update for unknown review {} ignored", id);
            return None;
        };

        // updated_at never moves backwards, even if the wall clock does
        let updated_at = self.clock.now().max(existing.updated_at);
        let review = Review {
            id: existing.id.clone(),
            title: draft.title,
            creator_name: draft.creator_name,
            rating: draft.rating,
            content: draft.content,
            poster_url: draft.poster_url,
            tmdb_id: draft.tmdb_id,
            release_year: draft.release_year,
            genres: draft.genres,
            created_at: existing.created_at,
            updated_at,
        };

        info!("Updated review {}", review.id);
        self.dispatch(ReviewAction::Update(review.clone()));
        Some(review)
    }

    /// Remove a review; returns whether anything was removed
    pub fn delete(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            debug!("Delete for unknown review {} ignored", id);
            return false;
        }

        info!("Deleted review {}", id);
        self.dispatch(ReviewAction::Delete(id.to_string()));
        true
    }

    /// The collection in stored order (newest created first unless reloaded otherwise)
    pub fn current(&self) -> &[Review] {
        &self.reviews
    }

    pub fn get(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == id)
    }

    /// Existing review of the same catalog movie, ignoring `excluding`
    pub fn find_by_catalog_id(&self, tmdb_id: u64, excluding: Option<&str>) -> Option<&Review> {
        self.reviews.iter().find(|review| {
            review.tmdb_id == Some(tmdb_id) && excluding.map_or(true, |id| review.id != id)
        })
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn dispatch(&mut self, action: ReviewAction) {
        let reviews = std::mem::take(&mut self.reviews);
        self.reviews = reduce(reviews, action);
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.reviews) {
            warn!(
                "Failed to save {} reviews to {}: {}. Changes are kept in memory only.",
                self.reviews.len(),
                self.storage.location(),
                e
            );
        }
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Keep the first record for each id; later copies would make update and delete disagree
fn drop_duplicate_ids(reviews: Vec<Review>) -> Vec<Review> {
    let mut seen = HashSet::with_capacity(reviews.len());
    let total = reviews.len();
    let unique: Vec<Review> = reviews.into_iter().filter(|review| seen.insert(review.id.clone())).collect();
    if unique.len() != total {
        warn!("Ignoring {} stored reviews with duplicate ids", total - unique.len());
    }
    unique
}

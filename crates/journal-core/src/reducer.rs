use journal_models::Review;

/// A state transition of the review collection
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    /// Replace the whole collection (rehydration)
    SetReviews(Vec<Review>),
    /// Prepend a fully-formed record
    Create(Review),
    /// Replace the record with the same id, keeping its position
    Update(Review),
    /// Remove the record with this id
    Delete(String),
}

/// Apply one action to the collection.
///
/// Pure: identity and timestamps are decided by the caller before the action
/// is built. Update and Delete for an unknown id leave the collection as is.
pub fn reduce(mut reviews: Vec<Review>, action: ReviewAction) -> Vec<Review> {
    match action {
        ReviewAction::SetReviews(replacement) => replacement,
        ReviewAction::Create(review) => {
            reviews.insert(0, review);
            reviews
        }
        ReviewAction::Update(review) => {
            if let Some(slot) = reviews.iter_mut().find(|existing| existing.id == review.id) {
                *slot = review;
            }
            reviews
        }
        ReviewAction::Delete(id) => {
            reviews.retain(|review| review.id != id);
            reviews
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use journal_models::StarRating;

    fn review(id: &str, rating: u8) -> Review {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Review {
            id: id.to_string(),
            title: format!("Movie {}", id),
            creator_name: "Director".to_string(),
            rating: StarRating::new(rating).unwrap(),
            content: "content".to_string(),
            poster_url: None,
            tmdb_id: None,
            release_year: None,
            genres: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn ids(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_create_prepends() {
        let state = reduce(vec![review("a", 4)], ReviewAction::Create(review("b", 2)));
        assert_eq!(ids(&state), vec!["b", "a"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let state = vec![review("a", 1), review("b", 2), review("c", 3)];
        let mut changed = review("b", 5);
        changed.content = "changed".to_string();

        let state = reduce(state, ReviewAction::Update(changed));
        assert_eq!(ids(&state), vec!["a", "b", "c"]);
        assert_eq!(state[1].content, "changed");
        assert_eq!(state[1].rating.value(), 5);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let state = vec![review("a", 1)];
        let after = reduce(state.clone(), ReviewAction::Update(review("zzz", 5)));
        assert_eq!(after, state);
    }

    #[test]
    fn test_delete() {
        let state = vec![review("a", 1), review("b", 2)];
        let state = reduce(state, ReviewAction::Delete("a".to_string()));
        assert_eq!(ids(&state), vec!["b"]);

        let state = reduce(state, ReviewAction::Delete("missing".to_string()));
        assert_eq!(ids(&state), vec!["b"]);
    }

    #[test]
    fn test_set_reviews_replaces_everything() {
        let state = reduce(vec![review("a", 1)], ReviewAction::SetReviews(vec![review("x", 3), review("y", 4)]));
        assert_eq!(ids(&state), vec!["x", "y"]);
    }
}

use journal_models::{Review, ReviewFilter, SortOrder};
use std::collections::BTreeSet;

/// Reviews matching every criterion of `filter`, in collection order
pub fn filter_reviews<'a>(reviews: &'a [Review], filter: &ReviewFilter) -> Vec<&'a Review> {
    let title_query = filter.title_query.as_ref().map(|q| q.to_lowercase());

    reviews
        .iter()
        .filter(|review| match &filter.genre {
            Some(genre) => review.has_genre(genre),
            None => true,
        })
        .filter(|review| match &title_query {
            Some(query) => review.title.to_lowercase().contains(query.as_str()),
            None => true,
        })
        .collect()
}

/// Stable sort; equal keys keep their relative order
pub fn sort_reviews(reviews: &mut [&Review], order: SortOrder) {
    match order {
        SortOrder::Latest => reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => reviews.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::RatingHigh => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOrder::RatingLow => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
    }
}

pub fn filter_and_sort<'a>(reviews: &'a [Review], filter: &ReviewFilter, order: SortOrder) -> Vec<&'a Review> {
    let mut selected = filter_reviews(reviews, filter);
    sort_reviews(&mut selected, order);
    selected
}

/// Every genre used by any review, sorted and without repeats
pub fn all_genres(reviews: &[Review]) -> Vec<String> {
    reviews
        .iter()
        .filter_map(|review| review.genres.as_ref())
        .flatten()
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use journal_models::StarRating;

    fn review(id: &str, title: &str, rating: u8, day: i64, genres: &[&str]) -> Review {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day);
        Review {
            id: id.to_string(),
            title: title.to_string(),
            creator_name: "Director".to_string(),
            rating: StarRating::new(rating).unwrap(),
            content: String::new(),
            poster_url: None,
            tmdb_id: None,
            release_year: None,
            genres: if genres.is_empty() {
                None
            } else {
                Some(genres.iter().map(|g| g.to_string()).collect())
            },
            created_at: at,
            updated_at: at,
        }
    }

    fn ids(reviews: &[&Review]) -> Vec<String> {
        reviews.iter().map(|r| r.id.clone()).collect()
    }

    fn sample() -> Vec<Review> {
        vec![
            review("r2", "The Dark Knight", 2, 3, &["Action", "Crime"]),
            review("r5", "Spirited Away", 5, 1, &["Animation", "Fantasy"]),
            review("r3", "Dark Waters", 3, 2, &["Drama"]),
        ]
    }

    #[test]
    fn test_rating_high() {
        let reviews = sample();
        let sorted = filter_and_sort(&reviews, &ReviewFilter::default(), SortOrder::RatingHigh);
        let ratings: Vec<u8> = sorted.iter().map(|r| r.rating.value()).collect();
        assert_eq!(ratings, vec![5, 3, 2]);
    }

    #[test]
    fn test_rating_low() {
        let reviews = sample();
        let sorted = filter_and_sort(&reviews, &ReviewFilter::default(), SortOrder::RatingLow);
        assert_eq!(ids(&sorted), vec!["r2", "r3", "r5"]);
    }

    #[test]
    fn test_by_creation_time() {
        let reviews = sample();
        let latest = filter_and_sort(&reviews, &ReviewFilter::default(), SortOrder::Latest);
        assert_eq!(ids(&latest), vec!["r2", "r3", "r5"]);
        let oldest = filter_and_sort(&reviews, &ReviewFilter::default(), SortOrder::Oldest);
        assert_eq!(ids(&oldest), vec!["r5", "r3", "r2"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let reviews = vec![
            review("a", "A", 4, 0, &[]),
            review("b", "B", 4, 1, &[]),
            review("c", "C", 5, 2, &[]),
        ];
        let sorted = filter_and_sort(&reviews, &ReviewFilter::default(), SortOrder::RatingHigh);
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_title_filter_is_case_insensitive() {
        let reviews = sample();
        let filter = ReviewFilter::new(None, Some("dARK".to_string()));
        let matched = filter_reviews(&reviews, &filter);
        assert_eq!(ids(&matched), vec!["r2", "r3"]);
    }

    #[test]
    fn test_filters_compose() {
        let reviews = sample();
        let filter = ReviewFilter::new(Some("Crime".to_string()), Some("dark".to_string()));
        assert_eq!(ids(&filter_reviews(&reviews, &filter)), vec!["r2"]);

        let filter = ReviewFilter::new(Some("Drama".to_string()), Some("knight".to_string()));
        assert!(filter_reviews(&reviews, &filter).is_empty());
    }

    #[test]
    fn test_genre_filter_is_exact() {
        let reviews = sample();
        let filter = ReviewFilter::new(Some("action".to_string()), None);
        assert!(filter_reviews(&reviews, &filter).is_empty());
    }

    #[test]
    fn test_all_genres() {
        let mut reviews = sample();
        reviews.push(review("r9", "Untagged", 1, 0, &[]));
        reviews.push(review("r8", "Heat", 4, 0, &["Crime"]));
        assert_eq!(all_genres(&reviews), vec!["Action", "Animation", "Crime", "Drama", "Fantasy"]);
    }
}

use journal_models::{Review, ReviewStatistics};

/// Count, rounded mean and per-star histogram in one pass
pub fn compute_statistics(reviews: &[Review]) -> ReviewStatistics {
    if reviews.is_empty() {
        return ReviewStatistics::empty();
    }

    let mut distribution = [0usize; 5];
    let mut total_rating: u64 = 0;
    for review in reviews {
        let stars = review.rating.value();
        total_rating += stars as u64;
        distribution[(stars - 1) as usize] += 1;
    }

    let average = total_rating as f64 / reviews.len() as f64;

    ReviewStatistics {
        total_reviews: reviews.len(),
        average_rating: (average * 10.0).round() / 10.0,
        rating_distribution: distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use journal_models::StarRating;

    fn rated(ratings: &[u8]) -> Vec<Review> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, rating)| Review {
                id: format!("r{}", i),
                title: format!("Movie {}", i),
                creator_name: "Director".to_string(),
                rating: StarRating::new(*rating).unwrap(),
                content: String::new(),
                poster_url: None,
                tmdb_id: None,
                release_year: None,
                genres: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn test_statistics() {
        let stats = compute_statistics(&rated(&[5, 5, 4, 3, 1]));
        assert_eq!(stats.total_reviews, 5);
        assert_eq!(stats.average_rating, 3.6);
        assert_eq!(stats.rating_distribution, [1, 0, 1, 1, 2]);
        assert_eq!(stats.count_for(5), 2);
        assert_eq!(stats.percentage_for(5), 40.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let stats = compute_statistics(&rated(&[5, 4, 4]));
        assert_eq!(stats.average_rating, 4.3);

        let stats = compute_statistics(&rated(&[1, 2]));
        assert_eq!(stats.average_rating, 1.5);
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats, ReviewStatistics::empty());
        assert_eq!(stats.percentage_for(3), 0.0);
    }
}

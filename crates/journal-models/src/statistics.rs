use serde::{Deserialize, Serialize};

/// Aggregate figures over a review collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewStatistics {
    pub total_reviews: usize,
    /// Mean rating rounded to one decimal place; 0.0 for an empty collection
    pub average_rating: f64,
    /// Count of reviews per rating, index 0 is one star
    pub rating_distribution: [usize; 5],
}

impl ReviewStatistics {
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
            rating_distribution: [0; 5],
        }
    }

    pub fn count_for(&self, stars: u8) -> usize {
        match stars {
            1..=5 => self.rating_distribution[(stars - 1) as usize],
            _ => 0,
        }
    }

    /// Share of reviews with the given rating, in percent
    pub fn percentage_for(&self, stars: u8) -> f64 {
        if self.total_reviews == 0 {
            return 0.0;
        }
        self.count_for(stars) as f64 / self.total_reviews as f64 * 100.0
    }
}

impl Default for ReviewStatistics {
    fn default() -> Self {
        Self::empty()
    }
}

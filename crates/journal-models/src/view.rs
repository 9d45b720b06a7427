use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering modes for review listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Newest first by creation time
    #[default]
    Latest,
    Oldest,
    RatingHigh,
    RatingLow,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Oldest => "oldest",
            SortOrder::RatingHigh => "rating-high",
            SortOrder::RatingLow => "rating-low",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest" | "newest" => Ok(SortOrder::Latest),
            "oldest" => Ok(SortOrder::Oldest),
            "rating-high" | "rating_high" => Ok(SortOrder::RatingHigh),
            "rating-low" | "rating_low" => Ok(SortOrder::RatingLow),
            _ => Err(format!(
                "Invalid sort order: {}. Use 'latest', 'oldest', 'rating-high', or 'rating-low'",
                s
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing filter. Both criteria must match when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    /// Exact genre name; `None` (or "all") disables the genre filter
    pub genre: Option<String>,
    /// Case-insensitive substring of the title
    pub title_query: Option<String>,
}

impl ReviewFilter {
    pub fn new(genre: Option<String>, title_query: Option<String>) -> Self {
        Self {
            genre: genre.filter(|g| !g.is_empty() && !g.eq_ignore_ascii_case("all")),
            title_query: title_query.filter(|q| !q.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.title_query.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("rating-high".parse::<SortOrder>(), Ok(SortOrder::RatingHigh));
        assert_eq!("LATEST".parse::<SortOrder>(), Ok(SortOrder::Latest));
        assert!("random".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_filter_all_genre_is_no_filter() {
        let filter = ReviewFilter::new(Some("all".to_string()), Some(String::new()));
        assert!(filter.is_empty());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Star rating on a 1-5 scale.
///
/// Serialized as the bare integer; deserializing anything outside 1..=5 fails,
/// which makes the whole document it appears in invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rating must be between {min} and {max}, got {value}")]
pub struct RatingError {
    pub value: u8,
    pub min: u8,
    pub max: u8,
}

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Render as filled/empty stars, e.g. `★★★☆☆`
    pub fn stars(self) -> String {
        let filled = self.0 as usize;
        let empty = (Self::MAX - self.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for StarRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(StarRating::new(0).is_err());
        assert!(StarRating::new(6).is_err());
        for value in 1..=5 {
            assert_eq!(StarRating::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_rating_serializes_as_integer() {
        let rating = StarRating::new(4).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
        let parsed: StarRating = serde_json::from_str("2").unwrap();
        assert_eq!(parsed.value(), 2);
        assert!(serde_json::from_str::<StarRating>("9").is_err());
    }

    #[test]
    fn test_stars() {
        assert_eq!(StarRating::new(3).unwrap().stars(), "★★★☆☆");
        assert_eq!(StarRating::new(5).unwrap().stars(), "★★★★★");
    }
}

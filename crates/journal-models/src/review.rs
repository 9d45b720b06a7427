use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::movie::MovieDetails;
use crate::rating::StarRating;

/// A stored review.
///
/// `id` and `created_at` are assigned by the review store and never change;
/// everything else is replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub title: String,
    pub creator_name: String, // Director
    pub rating: StarRating,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review fields supplied by the user: everything except identity and timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub title: String,
    pub creator_name: String,
    pub rating: StarRating,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("director is required")]
    MissingCreator,
    #[error("review content is required")]
    MissingContent,
}

impl ReviewDraft {
    pub fn new(title: impl Into<String>, creator_name: impl Into<String>, rating: StarRating, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            creator_name: creator_name.into(),
            rating,
            content: content.into(),
            poster_url: None,
            tmdb_id: None,
            release_year: None,
            genres: None,
        }
    }

    /// Build a draft from a catalog pick.
    ///
    /// `poster_url` is the already-resolved image URL. An empty genre list is
    /// stored as absent.
    pub fn from_details(details: &MovieDetails, poster_url: Option<String>, rating: StarRating, content: impl Into<String>) -> Self {
        Self {
            title: details.title.clone(),
            creator_name: details.director.clone(),
            rating,
            content: content.into(),
            poster_url,
            tmdb_id: Some(details.id).filter(|id| *id != 0),
            release_year: details.release_year(),
            genres: Some(details.genres.clone()).filter(|genres| !genres.is_empty()),
        }
    }

    /// Required text fields must be non-blank
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.creator_name.trim().is_empty() {
            return Err(DraftError::MissingCreator);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::MissingContent);
        }
        Ok(())
    }

    /// Trim surrounding whitespace from the free-text fields
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.creator_name = self.creator_name.trim().to_string();
        self.content = self.content.trim().to_string();
        self
    }
}

impl Review {
    /// The user-editable part of this review
    pub fn to_draft(&self) -> ReviewDraft {
        ReviewDraft {
            title: self.title.clone(),
            creator_name: self.creator_name.clone(),
            rating: self.rating,
            content: self.content.clone(),
            poster_url: self.poster_url.clone(),
            tmdb_id: self.tmdb_id,
            release_year: self.release_year.clone(),
            genres: self.genres.clone(),
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres
            .as_ref()
            .map(|genres| genres.iter().any(|g| g == genre))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: u8) -> StarRating {
        StarRating::new(value).unwrap()
    }

    #[test]
    fn test_validate_requires_text_fields() {
        let draft = ReviewDraft::new("Inception", "Christopher Nolan", rating(5), "Great");
        assert!(draft.validate().is_ok());

        let blank_title = ReviewDraft::new("  ", "Christopher Nolan", rating(5), "Great");
        assert_eq!(blank_title.validate(), Err(DraftError::MissingTitle));

        let blank_creator = ReviewDraft::new("Inception", "", rating(5), "Great");
        assert_eq!(blank_creator.validate(), Err(DraftError::MissingCreator));

        let blank_content = ReviewDraft::new("Inception", "Christopher Nolan", rating(5), "\n");
        assert_eq!(blank_content.validate(), Err(DraftError::MissingContent));
    }

    #[test]
    fn test_normalized_trims() {
        let draft = ReviewDraft::new(" Heat ", " Michael Mann", rating(4), "tense \n").normalized();
        assert_eq!(draft.title, "Heat");
        assert_eq!(draft.creator_name, "Michael Mann");
        assert_eq!(draft.content, "tense");
    }

    #[test]
    fn test_from_details() {
        let details = MovieDetails {
            id: 27205,
            title: "Inception".to_string(),
            poster_path: Some("/abc.jpg".to_string()),
            release_date: "2010-07-15".to_string(),
            overview: String::new(),
            director: "Christopher Nolan".to_string(),
            genres: vec![],
        };
        let draft = ReviewDraft::from_details(&details, Some("https://img/abc.jpg".to_string()), rating(5), "Dreams");
        assert_eq!(draft.tmdb_id, Some(27205));
        assert_eq!(draft.release_year.as_deref(), Some("2010"));
        assert_eq!(draft.genres, None);
        assert_eq!(draft.creator_name, "Christopher Nolan");
        assert_eq!(draft.poster_url.as_deref(), Some("https://img/abc.jpg"));
    }

    #[test]
    fn test_review_json_shape() {
        let json = r#"{
            "id": "r1",
            "title": "Heat",
            "creatorName": "Michael Mann",
            "rating": 4,
            "content": "tense",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating.value(), 4);
        assert!(review.genres.is_none());

        let out = serde_json::to_value(&review).unwrap();
        assert!(out.get("posterUrl").is_none());
        assert_eq!(out["creatorName"], "Michael Mann");
    }

    #[test]
    fn test_review_with_invalid_rating_rejected() {
        let json = r#"{"id":"r1","title":"x","creatorName":"y","rating":7,"content":"z",
            "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Review>(json).is_err());
    }
}

use serde::{Deserialize, Serialize};

/// One candidate returned by a catalog title search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSearchResult {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub overview: String,
    pub genre_ids: Vec<u32>,
}

/// Full catalog entry for a single movie, including the director resolved
/// from the credits lookup and genre display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub overview: String,
    pub director: String,
    pub genres: Vec<String>,
}

impl MovieSearchResult {
    /// Year part of the release date (`"2010-07-15"` -> `"2010"`)
    pub fn release_year(&self) -> Option<String> {
        release_year_of(&self.release_date)
    }
}

impl MovieDetails {
    pub fn release_year(&self) -> Option<String> {
        release_year_of(&self.release_date)
    }
}

pub(crate) fn release_year_of(release_date: &str) -> Option<String> {
    release_date
        .split('-')
        .next()
        .map(str::trim)
        .filter(|year| !year.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year() {
        assert_eq!(release_year_of("2010-07-15"), Some("2010".to_string()));
        assert_eq!(release_year_of("1999"), Some("1999".to_string()));
        assert_eq!(release_year_of(""), None);
    }
}

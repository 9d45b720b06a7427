use crate::error::LookupError;
use crate::tmdb::UNKNOWN_DIRECTOR;
use journal_models::{MovieDetails, MovieSearchResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbGenre {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

/// Search movies by title (first result page only)
pub async fn search_movies(
    client: &Client,
    base_url: &str,
    api_key: &str,
    query: &str,
    language: &str,
) -> Result<TmdbSearchResponse, LookupError> {
    let url = format!(
        "{}/search/movie?api_key={}&query={}&language={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(api_key),
        urlencoding::encode(query),
        urlencoding::encode(language),
    );
    get_json(client, &url, api_key).await
}

/// Fetch the details record for one movie
pub async fn get_movie(
    client: &Client,
    base_url: &str,
    api_key: &str,
    movie_id: u64,
    language: &str,
) -> Result<TmdbMovieDetails, LookupError> {
    let url = format!(
        "{}/movie/{}?api_key={}&language={}",
        base_url.trim_end_matches('/'),
        movie_id,
        urlencoding::encode(api_key),
        urlencoding::encode(language),
    );
    get_json(client, &url, api_key).await
}

/// Fetch cast and crew for one movie
pub async fn get_credits(
    client: &Client,
    base_url: &str,
    api_key: &str,
    movie_id: u64,
) -> Result<TmdbCredits, LookupError> {
    let url = format!(
        "{}/movie/{}/credits?api_key={}",
        base_url.trim_end_matches('/'),
        movie_id,
        urlencoding::encode(api_key),
    );
    get_json(client, &url, api_key).await
}

/// The request URL with the api_key value masked, raw or percent-encoded
fn redact_key(url: &str, api_key: &str) -> String {
    let encoded = urlencoding::encode(api_key);
    url.replace(encoded.as_ref(), "***").replace(api_key, "***")
}

async fn get_json<T>(client: &Client, url: &str, api_key: &str) -> Result<T, LookupError>
where
    T: for<'de> Deserialize<'de>,
{
    if api_key.trim().is_empty() {
        return Err(LookupError::MissingApiKey);
    }

    debug!(url = %redact_key(url, api_key), "Catalog request");

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("Catalog request failed with status {}", status);
        return Err(LookupError::Status { status, body });
    }

    Ok(response.json().await?)
}

/// First crew entry whose job is exactly "Director"
pub fn director_from_crew(crew: &[TmdbCrewMember]) -> Option<String> {
    crew.iter()
        .find(|member| member.job == "Director")
        .map(|member| member.name.clone())
}

/// Normalize a search page, keeping the service's order
pub fn map_search_response(response: TmdbSearchResponse, limit: usize) -> Vec<MovieSearchResult> {
    response
        .results
        .into_iter()
        .take(limit)
        .map(|movie| MovieSearchResult {
            id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path,
            release_date: movie.release_date.unwrap_or_default(),
            overview: movie.overview.unwrap_or_default(),
            genre_ids: movie.genre_ids,
        })
        .collect()
}

/// Combine a details record with its (optional) credits
pub fn map_details(details: TmdbMovieDetails, credits: Option<&TmdbCredits>) -> MovieDetails {
    let director = credits
        .and_then(|credits| director_from_crew(&credits.crew))
        .unwrap_or_else(|| UNKNOWN_DIRECTOR.to_string());

    MovieDetails {
        id: details.id,
        title: details.title,
        poster_path: details.poster_path,
        release_date: details.release_date.unwrap_or_default(),
        overview: details.overview.unwrap_or_default(),
        director,
        genres: details.genres.into_iter().map(|genre| genre.name).collect(),
    }
}

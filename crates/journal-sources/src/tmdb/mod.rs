pub mod api;
pub mod client;

pub use client::TmdbClient;

/// Director placeholder when the credits lookup fails or lists no director
pub const UNKNOWN_DIRECTOR: &str = "unknown";

/// Join an image base URL and a catalog poster path.
///
/// Returns `None` when there is no path.
pub fn resolve_poster_url(image_base_url: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    let base = image_base_url.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{}{}", base, path))
    } else {
        Some(format!("{}/{}", base, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_poster_url() {
        let base = "https://image.tmdb.org/t/p/w500";
        assert_eq!(
            resolve_poster_url(base, Some("/qmDpIHrmpJINaRKAfWQfftjCdyi.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/qmDpIHrmpJINaRKAfWQfftjCdyi.jpg")
        );
        assert_eq!(resolve_poster_url(base, None), None);
        assert_eq!(resolve_poster_url(base, Some("")), None);
        assert_eq!(
            resolve_poster_url("https://img/", Some("x.jpg")).as_deref(),
            Some("https://img/x.jpg")
        );
    }
}

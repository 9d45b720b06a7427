/// Display name used for genre ids missing from the table
pub const UNKNOWN_GENRE: &str = "Other";

/// TMDB movie genre ids
const GENRES: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

pub fn genre_name(id: u32) -> &'static str {
    GENRES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_GENRE)
}

/// Map ids to names, dropping repeats but keeping first-seen order.
///
/// Several unknown ids collapse into a single `UNKNOWN_GENRE` entry.
pub fn genre_ids_to_names(ids: &[u32]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let name = genre_name(*id);
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

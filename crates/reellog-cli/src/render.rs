use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use journal_models::{MovieSearchResult, Review, ReviewStatistics, StarRating};
use journal_sources::genre_ids_to_names;
use owo_colors::OwoColorize;

const SHORT_ID_LEN: usize = 8;
const BAR_WIDTH: usize = 30;

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn genres_text(genres: Option<&Vec<String>>) -> String {
    genres.map(|g| g.join(", ")).unwrap_or_default()
}

pub fn review_table(reviews: &[&Review]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Year", "Director", "Rating", "Genres", "Written"]);

    for review in reviews {
        table.add_row(vec![
            Cell::new(short_id(&review.id)),
            Cell::new(&review.title),
            Cell::new(review.release_year.as_deref().unwrap_or("")),
            Cell::new(&review.creator_name),
            Cell::new(review.rating.stars()),
            Cell::new(genres_text(review.genres.as_ref())),
            Cell::new(review.created_at.format("%Y-%m-%d").to_string()),
        ]);
    }
    table
}

pub fn print_review(review: &Review) {
    let year = review
        .release_year
        .as_deref()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();
    println!("{}{}", review.title.bold(), year);
    println!("  {} {}", "Director:".dimmed(), review.creator_name);
    println!("  {} {} ({}/5)", "Rating:".dimmed(), review.rating.stars().yellow(), review.rating);
    if let Some(genres) = review.genres.as_ref().filter(|g| !g.is_empty()) {
        println!("  {} {}", "Genres:".dimmed(), genres.join(", "));
    }
    if let Some(poster) = &review.poster_url {
        println!("  {} {}", "Poster:".dimmed(), poster);
    }
    if let Some(tmdb_id) = review.tmdb_id {
        println!("  {} https://www.themoviedb.org/movie/{}", "TMDB:".dimmed(), tmdb_id);
    }
    println!("  {} {}", "ID:".dimmed(), review.id);
    println!(
        "  {} {}   {} {}",
        "Written:".dimmed(),
        review.created_at.format("%Y-%m-%d %H:%M UTC"),
        "Updated:".dimmed(),
        review.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
    for line in review.content.lines() {
        println!("  {}", line);
    }
}

pub fn search_table(results: &[MovieSearchResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "Year", "Genres", "TMDB ID"]);

    for (index, result) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&result.title),
            Cell::new(result.release_year().unwrap_or_default()),
            Cell::new(genre_ids_to_names(&result.genre_ids).join(", ")),
            Cell::new(result.id),
        ]);
    }
    table
}

/// One-line label for interactive pickers
pub fn search_label(result: &MovieSearchResult) -> String {
    match result.release_year() {
        Some(year) => format!("{} ({})", result.title, year),
        None => result.title.clone(),
    }
}

/// Bar length for one histogram row; non-empty buckets always get a visible bar
pub fn bar_length(percentage: f64, count: usize) -> usize {
    let floor = if count > 0 { 10.0 } else { 0.0 };
    let percent = percentage.max(floor).min(100.0);
    ((percent / 100.0) * BAR_WIDTH as f64).round() as usize
}

pub fn print_statistics(stats: &ReviewStatistics) {
    if stats.total_reviews == 0 {
        println!("No statistics yet - write a review to see them here.");
        return;
    }

    let rounded = (stats.average_rating.round() as u8).clamp(StarRating::MIN, StarRating::MAX);
    let stars = StarRating::new(rounded).map(|r| r.stars()).unwrap_or_default();

    println!("{}", "Review statistics".bold());
    println!("  {} {}", "Total reviews:".dimmed(), stats.total_reviews);
    println!("  {} {:.1} {}", "Average rating:".dimmed(), stats.average_rating, stars.yellow());
    println!();
    println!("{}", "Rating distribution".bold());

    for stars in (StarRating::MIN..=StarRating::MAX).rev() {
        let count = stats.count_for(stars);
        let percentage = stats.percentage_for(stars);
        let bar = "█".repeat(bar_length(percentage, count));
        println!("  {}★ {:<width$} {:>3} ({:>5.1}%)", stars, bar.cyan(), count, percentage, width = BAR_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(0.0, 0), 0);
        assert_eq!(bar_length(100.0, 4), BAR_WIDTH);
        // Small buckets are bumped to the minimum visible width
        assert_eq!(bar_length(2.0, 1), 3);
        assert_eq!(bar_length(50.0, 2), 15);
    }
}

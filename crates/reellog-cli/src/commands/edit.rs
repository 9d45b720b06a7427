use crate::commands::{picker, prompts};
use crate::commands::search_ui::is_interactive;
use crate::context::{resolve_review, AppContext};
use crate::output::Output;
use crate::render;
use clap::Args;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use journal_models::{ReviewDraft, StarRating};
use journal_sources::MovieCatalog;

/// Review fields that can be given on the command line
#[derive(Args, Debug, Default)]
pub struct ReviewFields {
    /// Movie title
    #[arg(long)]
    pub title: Option<String>,

    /// Director
    #[arg(long)]
    pub director: Option<String>,

    /// Star rating, 1-5
    #[arg(long, short = 'r', value_parser = parse_rating)]
    pub rating: Option<StarRating>,

    /// Review text
    #[arg(long, short = 'c')]
    pub content: Option<String>,

    /// Release year
    #[arg(long)]
    pub year: Option<String>,

    /// Genre (repeat for several)
    #[arg(long = "genre", value_name = "GENRE")]
    pub genres: Vec<String>,
}

pub fn parse_rating(s: &str) -> Result<StarRating, String> {
    let value: u8 = s.trim().parse().map_err(|_| format!("'{}' is not a number between 1 and 5", s))?;
    StarRating::new(value).map_err(|e| e.to_string())
}

impl ReviewFields {
    /// Overlay the given fields onto `draft`
    pub fn apply_to(self, mut draft: ReviewDraft) -> ReviewDraft {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(director) = self.director {
            draft.creator_name = director;
        }
        if let Some(rating) = self.rating {
            draft.rating = rating;
        }
        if let Some(content) = self.content {
            draft.content = content;
        }
        if let Some(year) = self.year {
            draft.release_year = Some(year).filter(|y| !y.trim().is_empty());
        }
        if !self.genres.is_empty() {
            draft.genres = Some(self.genres);
        }
        draft
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.rating.is_none()
            && self.content.is_none()
            && self.year.is_none()
            && self.genres.is_empty()
    }
}

pub async fn run_edit(
    ctx: &AppContext,
    id: &str,
    fields: ReviewFields,
    query: Option<String>,
    pick: Option<usize>,
    output: &Output,
) -> Result<()> {
    let mut store = ctx.open_store();

    let Some(existing) = resolve_review(store.current(), id)?.cloned() else {
        output.warn(format!("No review with ID '{}' - nothing changed", id));
        return Ok(());
    };

    let mut draft = existing.to_draft();

    if let Some(query) = query {
        let catalog = ctx.catalog()?;
        let candidate = picker::pick_candidate(ctx, catalog.clone(), &query, pick, output).await?;
        if let Some(other) = store.find_by_catalog_id(candidate.id, Some(&existing.id)) {
            return Err(eyre!(
                "You have already reviewed \"{}\" (ID {})",
                other.title,
                render::short_id(&other.id)
            ));
        }
        let details = picker::fetch_details(&catalog, &candidate).await?;
        let poster_url = catalog.resolve_poster_url(details.poster_path.as_deref());
        draft = ReviewDraft::from_details(&details, poster_url, draft.rating, draft.content);
    } else if fields.is_empty() && is_interactive() && output.is_human() {
        draft.rating = prompts::prompt_rating(Some(draft.rating))?;
        draft.content = prompts::prompt_content(Some(&draft.content))?;
    }

    let draft = fields.apply_to(draft).normalized();
    draft.validate().map_err(|e| eyre!("Cannot save review: {}", e))?;

    match store.update(&existing.id, draft) {
        Some(updated) => output.emit(&updated, || {
            output.success(format!("Updated review of {}", updated.title));
        }),
        None => output.warn(format!("No review with ID '{}' - nothing changed", id)),
    }
    Ok(())
}

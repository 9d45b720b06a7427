use crate::commands::edit::ReviewFields;
use crate::commands::search_ui::is_interactive;
use crate::commands::{picker, prompts};
use crate::context::AppContext;
use crate::output::Output;
use crate::render;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use journal_models::{ReviewDraft, StarRating};
use journal_sources::MovieCatalog;

pub async fn run_add(
    ctx: &AppContext,
    fields: ReviewFields,
    query: Option<String>,
    pick: Option<usize>,
    output: &Output,
) -> Result<()> {
    let mut store = ctx.open_store();
    let interactive = is_interactive() && output.is_human();

    let draft = match query {
        Some(query) => {
            let catalog = ctx.catalog()?;
            let candidate = picker::pick_candidate(ctx, catalog.clone(), &query, pick, output).await?;

            // One review per movie
            if let Some(existing) = store.find_by_catalog_id(candidate.id, None) {
                return Err(eyre!(
                    "You have already reviewed \"{}\" (ID {}). Use `reellog edit` to change it.",
                    existing.title,
                    render::short_id(&existing.id)
                ));
            }

            let details = picker::fetch_details(&catalog, &candidate).await?;
            let poster_url = catalog.resolve_poster_url(details.poster_path.as_deref());

            let rating = required_rating(fields.rating, interactive)?;
            let content = required_content(fields.content.clone(), interactive)?;
            let draft = ReviewDraft::from_details(&details, poster_url, rating, content);

            // Explicit flags still win over catalog data
            ReviewFields {
                rating: None,
                content: None,
                ..fields
            }
            .apply_to(draft)
        }
        None => manual_draft(fields, interactive)?,
    };

    let draft = draft.normalized();
    draft.validate().map_err(|e| eyre!("Cannot save review: {}", e))?;

    let review = store.create(draft);
    output.emit(&review, || {
        output.success(format!(
            "Saved review of {} {} (ID {})",
            review.title,
            review.rating.stars(),
            render::short_id(&review.id)
        ));
    });
    Ok(())
}

fn manual_draft(fields: ReviewFields, interactive: bool) -> Result<ReviewDraft> {
    let title = match fields.title.clone() {
        Some(title) => title,
        None if interactive => prompts::prompt_string("Title", None)?,
        None => return Err(eyre!("--title is required (or use --query to search the catalog)")),
    };
    let director = match fields.director.clone() {
        Some(director) => director,
        None if interactive => prompts::prompt_string("Director", None)?,
        None => return Err(eyre!("--director is required")),
    };
    let rating = required_rating(fields.rating, interactive)?;
    let content = required_content(fields.content.clone(), interactive)?;

    Ok(fields.apply_to(ReviewDraft::new(title, director, rating, content)))
}

fn required_rating(rating: Option<StarRating>, interactive: bool) -> Result<StarRating> {
    match rating {
        Some(rating) => Ok(rating),
        None if interactive => prompts::prompt_rating(None),
        None => Err(eyre!("--rating is required (1-5)")),
    }
}

fn required_content(content: Option<String>, interactive: bool) -> Result<String> {
    match content {
        Some(content) => Ok(content),
        None if interactive => prompts::prompt_content(None),
        None => Err(eyre!("--content is required")),
    }
}

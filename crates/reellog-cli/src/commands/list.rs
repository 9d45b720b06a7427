use crate::context::{resolve_review, AppContext};
use crate::output::Output;
use crate::render;
use color_eyre::Result;
use journal_core::filter_and_sort;
use journal_models::{ReviewFilter, SortOrder};

pub fn run_list(
    ctx: &AppContext,
    sort: Option<SortOrder>,
    genre: Option<String>,
    search: Option<String>,
    output: &Output,
) -> Result<()> {
    let store = ctx.open_store();
    let order = sort.unwrap_or(ctx.config.display.default_sort);
    let filter = ReviewFilter::new(genre, search);

    let reviews = filter_and_sort(store.current(), &filter, order);

    output.emit(&reviews, || {
        if store.is_empty() {
            output.info("No reviews yet. Write one with `reellog add --query <title>`.");
        } else if reviews.is_empty() {
            output.info("No reviews match the given filters.");
        } else {
            println!("{}", render::review_table(&reviews));
            output.info(format!("{} of {} reviews, sorted by {}", reviews.len(), store.len(), order));
        }
    });
    Ok(())
}

pub fn run_show(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let store = ctx.open_store();

    match resolve_review(store.current(), id)? {
        Some(review) => output.emit(review, || render::print_review(review)),
        None => output.warn(format!("No review with ID '{}'", id)),
    }
    Ok(())
}

use crate::commands::search_ui::SearchSpinner;
use crate::context::AppContext;
use crate::output::Output;
use crate::render;
use color_eyre::Result;
use journal_sources::MovieCatalog;

/// Look titles up in the catalog; reviews are not touched
pub async fn run_search(ctx: &AppContext, query: &str, output: &Output) -> Result<()> {
    if query.trim().is_empty() {
        output.warn("Nothing to search for");
        return Ok(());
    }

    let catalog = ctx.catalog()?;

    let spinner = SearchSpinner::start(format!("Searching for \"{}\"...", query.trim()));
    let results = catalog.search(query).await;
    spinner.finish();

    output.emit(&results, || {
        if results.is_empty() {
            output.info(format!("No movies found for \"{}\"", query.trim()));
        } else {
            println!("{}", render::search_table(&results));
        }
    });
    Ok(())
}

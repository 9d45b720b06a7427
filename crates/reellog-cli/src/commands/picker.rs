use crate::commands::prompts;
use crate::commands::search_ui::{is_interactive, SearchSpinner};
use crate::context::AppContext;
use crate::output::Output;
use crate::render;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use journal_core::{DebouncedSearch, SearchOutcome};
use journal_models::{MovieDetails, MovieSearchResult};
use journal_sources::{MovieCatalog, TmdbClient};
use std::sync::Arc;

/// Search the catalog and let the user choose one candidate.
///
/// `pick` is 1-based; without it the user chooses interactively.
pub async fn pick_candidate(
    ctx: &AppContext,
    catalog: Arc<TmdbClient>,
    query: &str,
    pick: Option<usize>,
    output: &Output,
) -> Result<MovieSearchResult> {
    let search = DebouncedSearch::from_config(catalog, &ctx.config.search);

    let spinner = SearchSpinner::start(format!("Searching for \"{}\"...", query.trim()));
    let outcome = search.submit(query).await;
    spinner.finish();

    let results = match outcome {
        SearchOutcome::Results(results) => results,
        SearchOutcome::Cleared => {
            return Err(eyre!(
                "Search text must be at least {} characters",
                ctx.config.search.min_query_length
            ))
        }
        SearchOutcome::Superseded => Vec::new(),
    };

    if results.is_empty() {
        return Err(eyre!("No movies found for \"{}\"", query.trim()));
    }

    let can_prompt = is_interactive() && output.is_human();
    let index = match selection(pick, results.len(), can_prompt)? {
        Selection::Index(index) => index,
        Selection::Prompt => {
            let labels: Vec<String> = results.iter().map(render::search_label).collect();
            prompts::prompt_select("Which movie?", &labels)?
        }
        Selection::ListOnly => {
            output.emit(&results, || println!("{}", render::search_table(&results)));
            return Err(eyre!("Several movies match; choose one with --pick N"));
        }
    };

    Ok(results[index].clone())
}

#[derive(Debug, PartialEq, Eq)]
enum Selection {
    /// 0-based index into the results
    Index(usize),
    Prompt,
    /// No way to ask: show the candidates and stop
    ListOnly,
}

fn selection(pick: Option<usize>, count: usize, can_prompt: bool) -> Result<Selection> {
    match pick {
        Some(0) => Err(eyre!("--pick is 1-based")),
        Some(n) if n > count => Err(eyre!("--pick {} is out of range: only {} results", n, count)),
        Some(n) => Ok(Selection::Index(n - 1)),
        None if can_prompt => Ok(Selection::Prompt),
        None => Ok(Selection::ListOnly),
    }
}

/// Full details for a chosen candidate, including the director
pub async fn fetch_details(catalog: &TmdbClient, candidate: &MovieSearchResult) -> Result<MovieDetails> {
    let spinner = SearchSpinner::start(format!("Fetching details for {}...", candidate.title));
    let details = catalog.get_details(candidate.id).await;
    spinner.finish();

    details.ok_or_else(|| eyre!("Could not fetch details for \"{}\" from the catalog", candidate.title))
}

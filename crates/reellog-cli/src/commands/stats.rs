use crate::context::AppContext;
use crate::output::Output;
use crate::render;
use color_eyre::Result;
use journal_core::{all_genres, compute_statistics};

pub fn run_stats(ctx: &AppContext, output: &Output) -> Result<()> {
    let store = ctx.open_store();
    let stats = compute_statistics(store.current());

    output.emit(&stats, || render::print_statistics(&stats));
    Ok(())
}

pub fn run_genres(ctx: &AppContext, output: &Output) -> Result<()> {
    let store = ctx.open_store();
    let genres = all_genres(store.current());

    output.emit(&genres, || {
        if genres.is_empty() {
            output.info("No genres yet - reviews written from catalog searches are tagged automatically.");
        }
        for genre in &genres {
            println!("{}", genre);
        }
    });
    Ok(())
}

use crate::commands::prompts;
use crate::commands::search_ui::is_interactive;
use crate::context::{resolve_review, AppContext};
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;

pub fn run_delete(ctx: &AppContext, id: &str, yes: bool, output: &Output) -> Result<()> {
    let mut store = ctx.open_store();

    let Some(review) = resolve_review(store.current(), id)?.cloned() else {
        output.warn(format!("No review with ID '{}' - nothing deleted", id));
        return Ok(());
    };

    if !yes && is_interactive() && output.is_human() {
        let confirmed = prompts::prompt_yes_no(&format!("Delete your review of \"{}\"?", review.title), Some(false))?;
        if !confirmed {
            output.info("Cancelled");
            return Ok(());
        }
    }

    let deleted = store.delete(&review.id);
    output.emit(&json!({ "deleted": deleted, "id": review.id }), || {
        if deleted {
            output.success(format!("Deleted review of {}", review.title));
        } else {
            output.warn(format!("No review with ID '{}' - nothing deleted", id));
        }
    });
    Ok(())
}

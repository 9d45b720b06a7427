use color_eyre::Result;
use dialoguer::{Confirm, Editor, Input, Password, Select};
use journal_models::StarRating;

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new().with_prompt(prompt).allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for a secret (masked input)
pub fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for yes/no with optional default
pub fn prompt_yes_no(prompt: &str, default: Option<bool>) -> Result<bool> {
    let mut confirm_builder = Confirm::new().with_prompt(prompt);

    if let Some(default_value) = default {
        confirm_builder = confirm_builder.default(default_value);
    }

    confirm_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}

/// Pick a star rating from a list, highest first
pub fn prompt_rating(default: Option<StarRating>) -> Result<StarRating> {
    let choices: Vec<StarRating> = (StarRating::MIN..=StarRating::MAX)
        .rev()
        .filter_map(|value| StarRating::new(value).ok())
        .collect();
    let labels: Vec<String> = choices.iter().map(|r| format!("{} ({})", r.stars(), r)).collect();
    let default_index = default
        .and_then(|current| choices.iter().position(|r| *r == current))
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Rating")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read rating: {}", e))?;

    Ok(choices[index])
}

/// Review text: a single line inline, or the user's $EDITOR when they ask for it
pub fn prompt_content(existing: Option<&str>) -> Result<String> {
    let use_editor = prompt_yes_no("Write the review in your editor?", Some(false))?;
    if use_editor {
        let edited = Editor::new()
            .edit(existing.unwrap_or(""))
            .map_err(|e| color_eyre::eyre::eyre!("Failed to open editor: {}", e))?;
        return Ok(edited.unwrap_or_else(|| existing.unwrap_or("").to_string()));
    }
    prompt_string("Review", existing)
}

/// Choose one entry from `labels`, returning its index
pub fn prompt_select(prompt: &str, labels: &[String]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}

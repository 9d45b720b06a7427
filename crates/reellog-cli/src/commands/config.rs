use crate::commands::prompts;
use crate::context::{AppContext, API_KEY_ENV};
use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use journal_config::{Config, CredentialStore};
use serde_json::json;

pub fn run_config(ctx: &AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show_config(ctx, full, output),
        ConfigCommands::Tmdb { api_key, language, clear_api_key } => {
            configure_tmdb(ctx, api_key, language, clear_api_key, output)
        }
        ConfigCommands::Search { debounce_ms, min_query_length, max_results } => {
            configure_search(ctx, debounce_ms, min_query_length, max_results, output)
        }
        ConfigCommands::Paths => show_paths(ctx, output),
    }
}

/// Keep the first and last few characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}

fn show_config(ctx: &AppContext, full: bool, output: &Output) -> Result<()> {
    let config = &ctx.config;
    let api_key = ctx.api_key().map(|key| if full { key } else { mask_secret(&key) });

    let data = json!({
        "config_file": ctx.paths.config_file(),
        "reviews_file": ctx.reviews_file(),
        "tmdb": {
            "api_key": api_key,
            "language": config.tmdb.language,
            "base_url": config.tmdb.base_url,
            "image_base_url": config.tmdb.image_base_url,
        },
        "search": {
            "debounce_ms": config.search.debounce_ms,
            "min_query_length": config.search.min_query_length,
            "max_results": config.search.max_results,
        },
        "display": {
            "default_sort": config.display.default_sort,
        },
    });

    output.emit(&data, || {
        println!("Config file:     {}", ctx.paths.config_file().display());
        println!("Reviews file:    {}", ctx.reviews_file().display());
        println!();
        println!("[tmdb]");
        println!("  api_key        {}", api_key.as_deref().unwrap_or("(not set)"));
        println!("  language       {}", config.tmdb.language);
        println!("  base_url       {}", config.tmdb.base_url);
        println!("  image_base_url {}", config.tmdb.image_base_url);
        println!("[search]");
        println!("  debounce_ms      {}", config.search.debounce_ms);
        println!("  min_query_length {}", config.search.min_query_length);
        println!("  max_results      {}", config.search.max_results);
        println!("[display]");
        println!("  default_sort   {}", config.display.default_sort);
    });
    Ok(())
}

fn configure_tmdb(
    ctx: &AppContext,
    api_key: Option<String>,
    language: Option<String>,
    clear_api_key: bool,
    output: &Output,
) -> Result<()> {
    let mut cred_store = CredentialStore::load(ctx.paths.credentials_file())
        .map_err(|e| eyre!("Failed to load credentials: {:#}", e))?;

    if clear_api_key {
        if cred_store.clear_tmdb_api_key() {
            cred_store.save().map_err(|e| eyre!("Failed to save credentials: {:#}", e))?;
            output.success("Removed stored TMDB API key");
        } else {
            output.info("No TMDB API key was stored");
        }
    }

    // Prompt only when nothing else was asked for
    let api_key = match api_key {
        Some(key) => Some(key),
        None if language.is_none() && !clear_api_key => {
            Some(prompts::prompt_password("TMDB API key")?)
        }
        None => None,
    };

    if let Some(key) = api_key {
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(eyre!("API key cannot be empty"));
        }
        cred_store.set_tmdb_api_key(key);
        cred_store.save().map_err(|e| eyre!("Failed to save credentials: {:#}", e))?;
        output.success(format!("Saved TMDB API key to {}", cred_store.path().display()));
        if std::env::var_os(API_KEY_ENV).is_some() {
            output.warn(format!("{} is set and takes precedence over the stored key", API_KEY_ENV));
        }
    }

    if let Some(language) = language {
        update_config(ctx, |config| config.tmdb.language = language.clone())?;
        output.success(format!("Catalog language set to {}", language));
    }

    Ok(())
}

fn configure_search(
    ctx: &AppContext,
    debounce_ms: Option<u64>,
    min_query_length: Option<usize>,
    max_results: Option<usize>,
    output: &Output,
) -> Result<()> {
    if debounce_ms.is_none() && min_query_length.is_none() && max_results.is_none() {
        output.warn("No search option specified. Use --debounce-ms, --min-query-length, or --max-results");
        return Ok(());
    }

    update_config(ctx, |config| {
        if let Some(value) = debounce_ms {
            config.search.debounce_ms = value;
        }
        if let Some(value) = min_query_length {
            config.search.min_query_length = value;
        }
        if let Some(value) = max_results {
            config.search.max_results = value;
        }
    })?;
    output.success("Search settings updated");
    Ok(())
}

/// Re-read config.toml, apply `change`, validate and write it back
fn update_config(ctx: &AppContext, change: impl FnOnce(&mut Config)) -> Result<()> {
    let path = ctx.paths.config_file();
    let mut config = Config::load_or_default(&path).map_err(|e| eyre!("Failed to load {}: {}", path.display(), e))?;
    change(&mut config);
    config.validate().map_err(|e| eyre!("Invalid setting: {}", e))?;
    config
        .save_to_file(&path)
        .map_err(|e| eyre!("Failed to save {}: {}", path.display(), e))?;
    Ok(())
}

fn show_paths(ctx: &AppContext, output: &Output) -> Result<()> {
    let data = json!({
        "config": ctx.paths.config_file(),
        "credentials": ctx.paths.credentials_file(),
        "reviews": ctx.reviews_file(),
        "logs": ctx.paths.log_dir(),
    });

    output.emit(&data, || {
        println!("Config:      {}", ctx.paths.config_file().display());
        println!("Credentials: {}", ctx.paths.credentials_file().display());
        println!("Reviews:     {}", ctx.reviews_file().display());
        println!("Logs:        {}", ctx.paths.log_dir().display());
    });
    Ok(())
}

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Spinner shown while the catalog is queried.
///
/// Outside a terminal it degrades to structured log lines.
pub struct SearchSpinner {
    spinner: Option<ProgressBar>,
}

impl SearchSpinner {
    pub fn start(message: String) -> Self {
        if !is_interactive() {
            tracing::info!(operation = "catalog_lookup", message = %message, "Catalog lookup started");
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "))
        {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner: Some(spinner) }
    }

    pub fn finish(self) {
        if let Some(spinner) = self.spinner {
            spinner.finish_and_clear();
        }
    }
}

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}

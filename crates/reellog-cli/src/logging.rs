use anyhow::Result;
use std::io;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the global subscriber.
///
/// 0 = warn (the CLI reports results itself), 1 = debug without hyper noise,
/// 2+ = trace. `RUST_LOG` overrides the verbose level, `-q` overrides both.
pub fn init_logging(verbose_level: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let filter_str = match verbose_level {
            0 => "warn",
            1 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn,reqwest=info",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stderr().is_terminal());

    let registry = Registry::default().with(filter);

    if let Some(log_path) = log_file {
        let log_dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&log_dir)?;

        let log_filename = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", log_path.display()))?;

        // Rotation prefix without the extension: "reellog.log" -> "reellog"
        let log_prefix = log_filename.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(log_filename);

        let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, log_prefix);

        // Files always get JSON lines; the terminal keeps its usual format
        let file_layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(file_appender);

        if json {
            let stderr_layer = fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr);
            registry.with(file_layer).with(stderr_layer).init();
        } else {
            let stderr_layer = fmt::layer().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr);
            registry.with(file_layer).with(stderr_layer).init();
        }
    } else if json {
        let json_layer = fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr);
        registry.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr);
        registry.with(fmt_layer).init();
    }

    Ok(())
}

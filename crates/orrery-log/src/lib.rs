//! Logging setup for orrery binaries.
//!
//! Libraries in the workspace only emit `tracing` events; this crate installs
//! the subscriber. Console output carries uptime, target, and level. Debug
//! builds additionally write JSON lines to `orrery.log`.

use std::path::Path;

use orrery_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name of the JSON log written in debug builds.
pub const LOG_FILE_NAME: &str = "orrery.log";

const DEFAULT_FILTER: &str = "info";

/// Filter directive derived from the config, falling back to `info`.
pub fn filter_directive(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. When `debug_build`
/// is set and `log_dir` can be created, a JSON file layer is added as well.
///
/// # Examples
///
/// ```no_run
/// use orrery_config::Config;
/// use orrery_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` built from the default directive.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

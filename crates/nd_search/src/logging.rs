use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Prefixes every line with a fixed tag, e.g. the category being fetched.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefix: String,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.prefix.push_str(prefix.as_ref());
        self.prefix.push(' ');
        self
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}{}", self.prefix, message);
    }
}

/// Installs the stdout subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_writer(std::io::stdout)
                .init();
        });
    }
}

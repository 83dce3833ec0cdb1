//! Global output configuration.
//!
//! - Translations go to stdout (for piping)
//! - Banners, spinner, and errors go to stderr
//! - Quiet mode suppresses the spinner and status output
//! - Colors can be disabled via flag or the NO_COLOR environment variable

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output behavior settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize the global output configuration from CLI flags.
///
/// Subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// The current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Whether quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Whether colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

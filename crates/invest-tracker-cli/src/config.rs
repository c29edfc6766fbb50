//! Layered settings for the `ivt` binary.
//!
//! Sources, lowest to highest precedence:
//! - built-in defaults
//! - `ivt.toml` in the current directory (optional)
//! - `IVT_` environment variables, e.g. `IVT_OUTPUT=table`, `IVT_CURRENCY=EUR`
//!
//! Command-line flags override all of these.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::OutputFormat;

pub const CONFIG_FILE: &str = "ivt.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Output format used when `--output` is not given
    #[serde(default = "default_output")]
    pub output: OutputFormat,

    /// Currency label applied to submissions that do not name one
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output() -> OutputFormat {
    OutputFormat::Json
}

fn default_currency() -> String {
    invest_tracker_core::tracker::currency::default_currency()
        .code
        .to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: default_output(),
            currency: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from `ivt.toml` in the working directory and the
    /// environment.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("IVT_"))
            .extract()
            .map_err(Box::new)
    }
}

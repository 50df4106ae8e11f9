//! Log output settings.

use serde::{Deserialize, Serialize};

/// How the server's `tracing` output is filtered and rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive such as `"info"` or `"ripple_auth=debug,info"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_filter")]
    pub level: String,
    /// `"json"` for one object per line, anything else for pretty output.
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_filter(),
            format: default_format(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

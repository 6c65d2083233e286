use std::path::PathBuf;

/// Log output format for the stderr subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// `None` serves the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `PRODUCT_CATALOG_PATH` (optional): JSON catalog data file
    /// - `PRODUCT_LOG_FORMAT` (optional, default `compact`): `compact` or `json`
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup("PRODUCT_CATALOG_PATH")
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);

        let log_format = match lookup("PRODUCT_LOG_FORMAT").as_deref() {
            None | Some("") | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(format!(
                    "PRODUCT_LOG_FORMAT must be \"compact\" or \"json\", got {other:?}"
                ));
            }
        };

        Ok(Self {
            catalog_path,
            log_format,
        })
    }
}

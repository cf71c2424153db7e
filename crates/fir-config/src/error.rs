use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read FIR configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section whose required key is empty, e.g. `api.base_url`.
    #[error("[{section}] is missing a required value")]
    NotConfigured { section: String },

    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

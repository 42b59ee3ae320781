//! Errors raised while reading `gatesim.toml`.

/// A configuration file that could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read gatesim.toml: {0}")]
    Read(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the expected tables.
    #[error("invalid gatesim.toml: {0}")]
    Parse(String),

    /// A key parsed but holds an unusable value.
    #[error("`{key}` {reason}")]
    InvalidValue {
        /// Dotted key path, e.g. `simulation.max_passes`.
        key: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
}

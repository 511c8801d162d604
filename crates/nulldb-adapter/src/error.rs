use thiserror::Error;

/// Message carried by intercepted operations failing under the raise
/// strategy.
pub const DISCONNECTED_MESSAGE: &str = "database access is unavailable in unit tests";

/// Errors surfaced by the disconnected adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// An intercepted operation ran while the raise strategy was active.
    #[error("{}", DISCONNECTED_MESSAGE)]
    Disconnected,
    /// A strategy name outside `noop`/`raise` was supplied.
    #[error("{0:?} is not a valid strategy - valid values are noop and raise")]
    InvalidStrategy(String),
    /// Raw query text the adapter does not recognize as a safe no-op.
    #[error("unsupported query: {0}")]
    Unsupported(String),
    /// The injected schema loader failed to populate the registry.
    #[error("schema load failed: {0}")]
    SchemaLoad(String),
    /// Adapter configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias for results returned by adapter operations.
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;

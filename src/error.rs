use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the digishop-env library.
///
/// Reading a [`Configuration`](crate::Configuration) never fails; errors only
/// come from populating the raw value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

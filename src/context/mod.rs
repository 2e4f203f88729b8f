//! Application context through which application code reaches the environment.

use crate::config::{EnvLoader, RawEnv};
use crate::{Configuration, EnvReader, Error};

/// Central application context holding the injected environment.
///
/// Application code takes an `&AppContext` instead of reading ambient
/// globals, so tests can build one around any raw value.
///
/// ## Example
///
/// ```no_run
/// use digishop_env::{AppContext, EnvLoader};
///
/// let ctx = AppContext::builder()
///     .with_loader(
///         EnvLoader::builder()
///             .with_file("config/env.toml", false)
///             .with_env("DIGISHOP"),
///     )
///     .build()?;
///
/// let api_url = ctx.env().api_url;
/// # Ok::<(), digishop_env::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    reader: EnvReader,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::default()
    }

    pub fn reader(&self) -> &EnvReader {
        &self.reader
    }

    /// Returns the normalized configuration.
    pub fn env(&self) -> Configuration {
        self.reader.get_env()
    }
}

#[derive(Debug, Default)]
enum Pending {
    #[default]
    Unset,
    Raw(Option<RawEnv>),
    Loader(EnvLoader),
}

/// Builder for constructing an [`AppContext`].
///
/// Building without attaching anything is allowed and yields a context whose
/// environment is unset.
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    env: Pending,
}

impl AppContextBuilder {
    /// Injects an already populated raw value.
    pub fn with_raw(mut self, raw: impl Into<Option<RawEnv>>) -> Self {
        self.env = Pending::Raw(raw.into());
        self
    }

    /// Populates the raw value from a loader when [`build`](Self::build) runs.
    pub fn with_loader(mut self, loader: EnvLoader) -> Self {
        self.env = Pending::Loader(loader);
        self
    }

    /// Builds the `AppContext`.
    ///
    /// Returns an error only if an attached loader fails.
    pub fn build(self) -> Result<AppContext, Error> {
        let raw = match self.env {
            Pending::Unset => None,
            Pending::Raw(raw) => raw,
            Pending::Loader(loader) => loader.load()?,
        };
        Ok(AppContext {
            reader: EnvReader::new(raw),
        })
    }
}

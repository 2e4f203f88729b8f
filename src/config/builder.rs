use std::path::Path;

use super::env::EnvSource;
use super::file::FileSource;
use super::source::{CompiledSource, RawSource};
use super::{ConfigError, RawEnv};

/// Builder for populating the raw environment value from several sources.
///
/// Sources are applied in registration order, with later sources overriding
/// earlier ones field by field. A source that yields nothing leaves the
/// current value untouched.
///
/// ## Example
///
/// ```no_run
/// use digishop_env::{EnvLoader, EnvReader};
///
/// // compiled-in default -> env file -> DIGISHOP_API_URL
/// let raw = EnvLoader::builder()
///     .with_compiled()
///     .with_file("config/env.toml", false)
///     .with_env("DIGISHOP")
///     .load()?;
///
/// let reader = EnvReader::new(raw);
/// println!("{}", reader.get_env().api_url);
/// # Ok::<(), digishop_env::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .load() is called"]
pub struct EnvLoader {
    sources: Vec<Box<dyn RawSource>>,
}

impl EnvLoader {
    /// Creates a new loader with no sources.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a TOML file.
    ///
    /// If `required` is `true`, loading fails if the file doesn't exist.
    /// Optional files that are missing are skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds the process environment, reading `{prefix}_API_URL`.
    pub fn with_env(self, prefix: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix))
    }

    /// Adds the values captured at compile time.
    pub fn with_compiled(self) -> Self {
        self.with_source(CompiledSource)
    }

    /// Adds a literal raw value.
    pub fn with_raw(self, raw: RawEnv) -> Self {
        self.with_source(raw)
    }

    /// Adds any other source.
    pub fn with_source(mut self, source: impl RawSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads every source in order and merges the results.
    ///
    /// Returns `Ok(None)` if no source contributed a value.
    pub fn load(self) -> Result<Option<RawEnv>, ConfigError> {
        let mut merged: Option<RawEnv> = None;

        for source in &self.sources {
            let Some(raw) = source.load()? else {
                continue;
            };
            tracing::debug!(?source, "raw env source contributed");
            match merged.as_mut() {
                Some(current) => current.overlay(raw),
                None => merged = Some(raw),
            }
        }

        tracing::debug!(
            sources = self.sources.len(),
            api_url_present = merged.as_ref().is_some_and(|raw| raw.api_url.is_some()),
            "raw env loaded"
        );
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_no_sources_is_unset() {
        assert_eq!(EnvLoader::builder().load().unwrap(), None);
    }

    #[test]
    fn test_later_source_overrides() {
        let file = env_file(r#"api_url = "http://localhost:3000""#);
        let raw = EnvLoader::builder()
            .with_file(file.path(), true)
            .with_source(EnvSource::from_vars(
                "DIGISHOP",
                [("DIGISHOP_API_URL", "https://api.example.com")],
            ))
            .load()
            .unwrap();

        assert_eq!(raw, Some(RawEnv::with_api_url("https://api.example.com")));
    }

    #[test]
    fn test_empty_source_keeps_earlier_value() {
        let file = env_file("theme = \"dark\"");
        let raw = EnvLoader::builder()
            .with_raw(RawEnv::with_api_url("http://localhost:3000"))
            .with_file(file.path(), true)
            .with_source(EnvSource::from_vars("DIGISHOP", Vec::<(String, String)>::new()))
            .load()
            .unwrap();

        assert_eq!(raw, Some(RawEnv::with_api_url("http://localhost:3000")));
    }

    #[test]
    fn test_sources_without_values_stay_unset() {
        let raw = EnvLoader::builder()
            .with_file("/nonexistent/path/env.toml", false)
            .with_source(EnvSource::from_vars("DIGISHOP", [("OTHER", "x")]))
            .load()
            .unwrap();

        assert_eq!(raw, None);
    }

    #[test]
    fn test_present_but_empty_file_is_set() {
        let file = env_file("");
        let raw = EnvLoader::builder()
            .with_file(file.path(), true)
            .load()
            .unwrap();

        assert_eq!(raw, Some(RawEnv::default()));
    }

    #[test]
    fn test_source_error_propagates() {
        let result = EnvLoader::builder()
            .with_raw(RawEnv::with_api_url("http://localhost:3000"))
            .with_file("/nonexistent/path/env.toml", true)
            .load();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}

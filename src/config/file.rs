//! TOML file source.

use std::path::{Path, PathBuf};

use super::source::RawSource;
use super::{ConfigError, RawEnv};

/// A raw source that loads from a TOML file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist contribute nothing.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, loading fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RawSource for FileSource {
    fn load(&self) -> Result<Option<RawEnv>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let raw = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                    path: self.path.clone(),
                    source: e,
                })?;
                Ok(Some(raw))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.required {
                    Err(ConfigError::FileNotFound(self.path.clone()))
                } else {
                    tracing::debug!(path = %self.path.display(), "optional env file not found, skipping");
                    Ok(None)
                }
            }
            Err(e) => Err(ConfigError::ReadError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"https://api.example.com\"").unwrap();

        let raw = FileSource::new(file.path(), true).load().unwrap();

        assert_eq!(raw, Some(RawEnv::with_api_url("https://api.example.com")));
    }

    #[test]
    fn test_file_source_without_api_url() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = \"digishop\"").unwrap();

        let raw = FileSource::new(file.path(), true).load().unwrap();

        assert_eq!(raw, Some(RawEnv::default()));
    }

    #[test]
    fn test_file_source_required_missing() {
        let source = FileSource::new("/nonexistent/path/env.toml", true);
        let result = source.load();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_file_source_optional_missing() {
        let source = FileSource::new("/nonexistent/path/env.toml", false);

        assert_eq!(source.load().unwrap(), None);
    }

    #[test]
    fn test_file_source_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_url = ").unwrap();

        let result = FileSource::new(file.path(), false).load();

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_file_source_wrong_type() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_url = 8080").unwrap();

        let result = FileSource::new(file.path(), true).load();

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}

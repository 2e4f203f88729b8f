//! Normalized read of the injected raw environment.

use serde::{Deserialize, Serialize};

use crate::config::RawEnv;

/// The normalized configuration handed to application code.
///
/// `api_url` is always a defined string; it is empty when the raw value is
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub api_url: String,
}

/// Normalizes a raw environment value into a [`Configuration`].
///
/// Absent fields, or an absent raw value, become empty strings.
pub fn get_env(raw: Option<&RawEnv>) -> Configuration {
    let api_url = match raw.and_then(|raw| raw.api_url.as_deref()) {
        Some(api_url) => api_url.to_owned(),
        None => String::new(),
    };
    Configuration { api_url }
}

/// Reads the injected raw environment.
///
/// The raw value is fixed when the reader is constructed. Each call to
/// [`get_env`](Self::get_env) builds a fresh, independently owned
/// [`Configuration`]; the reader is never mutated and can be shared freely
/// across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReader {
    raw: Option<RawEnv>,
}

impl EnvReader {
    pub fn new(raw: Option<RawEnv>) -> Self {
        Self { raw }
    }

    /// A reader for a host that never populated the raw value.
    pub fn unset() -> Self {
        Self { raw: None }
    }

    pub fn raw(&self) -> Option<&RawEnv> {
        self.raw.as_ref()
    }

    pub fn get_env(&self) -> Configuration {
        get_env(self.raw.as_ref())
    }
}

impl From<RawEnv> for EnvReader {
    fn from(raw: RawEnv) -> Self {
        Self::new(Some(raw))
    }
}

impl From<Option<RawEnv>> for EnvReader {
    fn from(raw: Option<RawEnv>) -> Self {
        Self::new(raw)
    }
}

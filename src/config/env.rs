use std::collections::HashMap;

use super::source::RawSource;
use super::{ConfigError, RawEnv};

const API_URL_KEY: &str = "API_URL";

/// Reads the raw value from environment variables.
///
/// With prefix `DIGISHOP` the source looks up `DIGISHOP_API_URL`; with an
/// empty prefix it looks up `API_URL`. A variable that is set counts as a
/// value even when empty.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    vars: Option<HashMap<String, String>>,
}

impl EnvSource {
    /// Reads from the process environment at load time.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            vars: None,
        }
    }

    /// Reads from the given variables instead of the process environment.
    pub fn from_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// The full variable name holding `api_url`.
    pub fn api_url_key(&self) -> String {
        if self.prefix.is_empty() {
            API_URL_KEY.to_string()
        } else {
            format!("{}_{}", self.prefix, API_URL_KEY)
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            // Non-unicode values are treated as unset.
            None => std::env::var(key).ok(),
        }
    }
}

impl RawSource for EnvSource {
    fn load(&self) -> Result<Option<RawEnv>, ConfigError> {
        let key = self.api_url_key();
        let api_url = self.var(&key);
        tracing::trace!(%key, present = api_url.is_some(), "read env var");

        Ok(api_url.map(RawEnv::with_api_url))
    }
}

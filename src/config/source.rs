use super::{ConfigError, RawEnv};

/// Something that can produce a raw environment value.
///
/// `Ok(None)` means the source has nothing to contribute, which is not an error.
pub trait RawSource: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<Option<RawEnv>, ConfigError>;
}

impl RawSource for RawEnv {
    fn load(&self) -> Result<Option<RawEnv>, ConfigError> {
        Ok(Some(self.clone()))
    }
}

/// Values substituted into the binary at build time.
///
/// Reads `DIGISHOP_API_URL` from the compiler's environment via `option_env!`,
/// so the value is fixed when the crate is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledSource;

impl CompiledSource {
    fn api_url() -> Option<&'static str> {
        option_env!("DIGISHOP_API_URL")
    }
}

impl RawSource for CompiledSource {
    fn load(&self) -> Result<Option<RawEnv>, ConfigError> {
        Ok(Self::api_url().map(RawEnv::with_api_url))
    }
}

use serde::{Deserialize, Serialize};

/// The raw environment value injected by the host.
///
/// Every field is optional: the host may populate some, all or none of them.
/// Unknown keys are ignored so the same file can carry settings for other
/// parts of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEnv {
    #[serde(default, alias = "apiUrl", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl RawEnv {
    /// Creates a raw value with `api_url` set.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
        }
    }

    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.api_url.is_none()
    }

    /// Applies `overlay` on top of `self`; fields present in the overlay win.
    pub fn overlay(&mut self, overlay: RawEnv) {
        if let Some(api_url) = overlay.api_url {
            self.api_url = Some(api_url);
        }
    }
}

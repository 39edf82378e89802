//! API endpoint configuration and display constants

use crate::model::FormationId;

/// Base URL used when none is configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://formation-backend.onrender.com";

/// Path of the formations collection on the API.
pub const FORMATIONS_PATH: &str = "/api/formations";

/// Currency shown after every price.
pub const CURRENCY_SUFFIX: &str = "€";

/// Image shown when a formation has no usable image, or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Where the formations API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Configuration for the API at `base_url`. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at compile time from `FORMATIONS_API_URL`,
    /// falling back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("FORMATIONS_API_URL"))
    }

    fn from_override(base_url: Option<&str>) -> Self {
        base_url
            .filter(|url| !url.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET`/`POST` endpoint.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}{FORMATIONS_PATH}", self.base_url)
    }

    /// `PUT`/`DELETE` endpoint of one formation.
    #[must_use]
    pub fn item_url(&self, id: &FormationId) -> String {
        format!("{}{FORMATIONS_PATH}/{}", self.base_url, id.as_str().trim())
    }
}

// file: config.rs
// desc: choose which maze API revision the page talks to

use url::form_urlencoded;

use crate::request_url::{ApiVersion, DEFAULT_API_BASE};

/// Page query key that overrides the build-time API version.
pub const API_QUERY_KEY: &str = "api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub api_version: ApiVersion,
    pub api_base: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            api_base: DEFAULT_API_BASE,
        }
    }
}

impl AppConfig {
    /// Build-time settings, then the `?api=` override from the page URL.
    pub fn resolve() -> Self {
        let config = Self::from_values(option_env!("MAZE_API_VERSION"), option_env!("MAZE_API_BASE"));
        match page_search() {
            Some(search) => config.with_query_override(&search),
            None => config,
        }
    }

    pub fn from_values(version: Option<&str>, base: Option<&'static str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = version.map(str::trim).filter(|raw| !raw.is_empty()) {
            match raw.parse() {
                Ok(version) => config.api_version = version,
                Err(err) => log::warn!("MAZE_API_VERSION ignored: {}", err),
            }
        }
        if let Some(raw) = base.map(str::trim).filter(|raw| !raw.is_empty()) {
            match raw.trim_end_matches('/') {
                "" => log::warn!("MAZE_API_BASE ignored: {:?} leaves no endpoint path", raw),
                base => config.api_base = base,
            }
        }
        config
    }

    /// Applies `api=<version>` from a location search string such as `?api=b`.
    pub fn with_query_override(mut self, search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let requested = form_urlencoded::parse(search.as_bytes())
            .find(|(key, _)| key == API_QUERY_KEY)
            .map(|(_, value)| value.into_owned());
        if let Some(raw) = requested {
            match raw.parse() {
                Ok(version) => self.api_version = version,
                Err(err) => log::warn!("?{}= ignored: {}", API_QUERY_KEY, err),
            }
        }
        self
    }
}

fn page_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

//! Application Configuration
//!
//! Read once at startup from `<meta>` tags in `index.html`:
//!
//! ```html
//! <meta name="todo-api-base" content="/api">
//! <meta name="todo-log-level" content="debug">
//! ```

use std::str::FromStr;

use log::LevelFilter;

pub const API_BASE_META: &str = "todo-api-base";
pub const LOG_LEVEL_META: &str = "todo-log-level";

const DEFAULT_API_PATH: &str = "/api";
/// Used when the page has no usable origin (e.g. `file://`)
const FALLBACK_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute API root without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: resolve_api_base(None, None),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from the current document, falling back to defaults.
    pub fn from_document() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .filter(|o| o.starts_with("http"));
        Self::resolve(
            origin.as_deref(),
            meta_content(API_BASE_META).as_deref(),
            meta_content(LOG_LEVEL_META).as_deref(),
        )
    }

    pub fn resolve(origin: Option<&str>, api_base: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base: resolve_api_base(origin, api_base),
            log_level: log_level
                .and_then(|l| LevelFilter::from_str(l.trim()).ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    meta.get_attribute("content")
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Absolute bases are taken as-is; relative ones hang off the page origin.
fn resolve_api_base(origin: Option<&str>, configured: Option<&str>) -> String {
    let configured = configured.unwrap_or(DEFAULT_API_PATH);
    let base = if configured.starts_with("http://") || configured.starts_with("https://") {
        configured.to_string()
    } else {
        let origin = origin.unwrap_or(FALLBACK_ORIGIN).trim_end_matches('/');
        let path = configured.trim_start_matches('/');
        format!("{}/{}", origin, path)
    };
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(Some("https://todo.example"), None, None);
        assert_eq!(config.api_base, "https://todo.example/api");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(AppConfig::default().api_base, "http://localhost:8000/api");
    }

    #[test]
    fn test_configured_base() {
        let relative = AppConfig::resolve(Some("http://127.0.0.1:8080/"), Some("/v2/api/"), None);
        assert_eq!(relative.api_base, "http://127.0.0.1:8080/v2/api");

        let absolute = AppConfig::resolve(Some("http://127.0.0.1:8080"), Some("https://api.example/"), None);
        assert_eq!(absolute.api_base, "https://api.example");
    }

    #[test]
    fn test_log_level() {
        let config = AppConfig::resolve(None, None, Some("debug"));
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = AppConfig::resolve(None, None, Some("loud"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::warn;

use crate::error::Result;

/// On-disk/on-wire configuration shape: a flat string-to-string mapping.
pub type RawConfig = BTreeMap<String, String>;

pub const KEY_ARROW_NAV: &str = "enableArrowKeyNav";
pub const KEY_STEADY_PAGES: &str = "steadyPages";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed view over the recognized configuration flags. Everything defaults to
/// disabled; unrecognized keys in the raw mapping are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagerConfig {
    /// Arrow keys move between pages.
    pub enable_arrow_key_nav: bool,
    /// Pages are overlaid rather than stacked; the container height is
    /// synthesized from the section sum.
    pub steady_pages: bool,
}

impl PagerConfig {
    /// Interpret a raw flat mapping. Only the exact string `"true"` enables a
    /// flag; anything else, including a missing key, leaves it disabled.
    pub fn from_raw(raw: &RawConfig) -> Self {
        Self {
            enable_arrow_key_nav: flag(raw, KEY_ARROW_NAV),
            steady_pages: flag(raw, KEY_STEADY_PAGES),
        }
    }

    /// Load from a filesystem path or an http(s) URL.
    pub fn load(source: &str) -> Result<Self> {
        Ok(Self::from_raw(&load_raw(source)?))
    }

    /// Load from `source`, falling back to the all-defaults configuration when
    /// the file is missing, unreachable, or malformed.
    pub fn load_or_default(source: &str) -> Self {
        match Self::load(source) {
            Ok(config) => config,
            Err(err) => {
                warn!(source, error = %err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Render back into the raw flat-mapping shape.
    pub fn to_raw(&self) -> RawConfig {
        let mut raw = RawConfig::new();
        raw.insert(KEY_ARROW_NAV.to_string(), flag_str(self.enable_arrow_key_nav));
        raw.insert(KEY_STEADY_PAGES.to_string(), flag_str(self.steady_pages));
        raw
    }
}

fn flag(raw: &RawConfig, key: &str) -> bool {
    raw.get(key).map(|value| value == "true").unwrap_or(false)
}

fn flag_str(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Fetch the raw mapping from a filesystem path or an http(s) URL.
pub fn load_raw(source: &str) -> Result<RawConfig> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let url = url::Url::parse(source)?;
        let response = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?
            .get(url)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    } else {
        let content = std::fs::read_to_string(source)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn raw(pairs: &[(&str, &str)]) -> RawConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_flags_default_disabled() {
        let config = PagerConfig::from_raw(&RawConfig::new());
        assert!(!config.enable_arrow_key_nav);
        assert!(!config.steady_pages);
    }

    #[test]
    fn test_only_literal_true_enables() {
        let config = PagerConfig::from_raw(&raw(&[
            (KEY_ARROW_NAV, "true"),
            (KEY_STEADY_PAGES, "True"),
        ]));
        assert!(config.enable_arrow_key_nav);
        assert!(!config.steady_pages);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let config = PagerConfig::from_raw(&raw(&[
            ("somethingElse", "true"),
            (KEY_STEADY_PAGES, "true"),
        ]));
        assert!(!config.enable_arrow_key_nav);
        assert!(config.steady_pages);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"enableArrowKeyNav": "true"}}"#).unwrap();
        let config = PagerConfig::load(file.path().to_str().unwrap()).unwrap();
        assert!(config.enable_arrow_key_nav);
        assert!(!config.steady_pages);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = PagerConfig::load_or_default("/nonexistent/config.json");
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_load_or_default_on_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let config = PagerConfig::load_or_default(file.path().to_str().unwrap());
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_raw_round_trip() {
        let config = PagerConfig {
            enable_arrow_key_nav: true,
            steady_pages: false,
        };
        assert_eq!(PagerConfig::from_raw(&config.to_raw()), config);
    }
}

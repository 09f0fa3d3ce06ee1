//! Host-page settings.
//!
//! A page may embed
//! `<script type="application/json" id="walkthrough-settings">{...}</script>`
//! to tune logging and motion. Every field is optional.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

pub const SETTINGS_ELEMENT_ID: &str = "walkthrough-settings";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `EnvFilter` directive, e.g. `"debug"` or `"info,solar_walkthrough::model=trace"`.
    pub log_filter: String,
    /// Omit decorative animation (fade-ins, energy particles, status LED blink).
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.env_filter()?;
        Ok(settings)
    }

    /// `declaration` (a CSS `transition:` rule) unless motion is reduced.
    pub fn transition(&self, declaration: &'static str) -> &'static str {
        if self.reduced_motion { "" } else { declaration }
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|source| ConfigError::LogFilter {
            filter: self.log_filter.clone(),
            source,
        })
    }

    /// Reads the settings block from the current document; `Ok(None)` when the
    /// page has none.
    pub fn from_document() -> Result<Option<Self>, ConfigError> {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn fields_override_defaults() {
        let s = Settings::from_json(r#"{"reduced_motion": true, "log_filter": "debug"}"#).unwrap();
        assert_eq!(
            s,
            Settings {
                log_filter: "debug".to_string(),
                reduced_motion: true,
            }
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            Settings::from_json("{reduced_motion"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"theme": "dark"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn reduced_motion_drops_transitions() {
        let rule = "transition:all 0.3s;";
        assert_eq!(Settings::default().transition(rule), rule);
        let still = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert_eq!(still.transition(rule), "");
    }

    #[test]
    fn bad_log_filter_is_reported() {
        let err = Settings::from_json(r#"{"log_filter": "info,solar=loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::LogFilter { .. }));
        assert!(err.to_string().contains("solar=loud"));
    }
}

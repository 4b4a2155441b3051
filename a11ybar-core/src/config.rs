use crate::feature::Feature;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Root font size the magnifier applies when the host does not pick one.
pub const DEFAULT_MAX_FONT_SIZE: u32 = 24;

/// Visual presentation of the panel. Both themes drive the same flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Mui,
    Bootstrap,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mui => "mui",
            Self::Bootstrap => "bootstrap",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mui" => Ok(Self::Mui),
            "bootstrap" => Ok(Self::Bootstrap),
            _ => Err(()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings supplied by the page embedding the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub theme: Theme,
    pub language: String,
    /// Feature names the host does not want offered. Unknown names are
    /// ignored.
    pub excluded_features: Vec<String>,
    pub max_font_size: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: "en".to_string(),
            excluded_features: Vec::new(),
            max_font_size: DEFAULT_MAX_FONT_SIZE,
        }
    }
}

impl WidgetConfig {
    /// Parse a host config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve [`WidgetConfig::excluded_features`] into features.
    #[must_use]
    pub fn excluded(&self) -> BTreeSet<Feature> {
        self.excluded_features
            .iter()
            .filter_map(|name| {
                let parsed = name.parse::<Feature>().ok();
                if parsed.is_none() {
                    log::warn!("ignoring unknown excluded feature {name:?}");
                }
                parsed
            })
            .collect()
    }

    /// CSS value for the magnified root font size.
    #[must_use]
    pub fn magnified_font_size(&self) -> String {
        format!("{}px", self.max_font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let cfg = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(cfg, WidgetConfig::default());
        assert_eq!(cfg.max_font_size, 24);
        assert_eq!(cfg.magnified_font_size(), "24px");
    }

    #[test]
    fn parses_host_fields() {
        let cfg = WidgetConfig::from_json(
            r#"{"theme":"bootstrap","language":"fr","excludedFeatures":["magnify","nope"],"maxFontSize":30}"#,
        )
        .unwrap();
        assert_eq!(cfg.theme, Theme::Bootstrap);
        assert_eq!(cfg.language, "fr");
        assert_eq!(cfg.magnified_font_size(), "30px");
        let excluded: Vec<_> = cfg.excluded().into_iter().collect();
        assert_eq!(excluded, vec![Feature::Magnify]);
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = WidgetConfig::from_json(r#"{"theme":"material"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid widget config"));
    }

    #[test]
    fn theme_names_parse() {
        assert_eq!("mui".parse::<Theme>(), Ok(Theme::Mui));
        assert_eq!("bootstrap".parse::<Theme>(), Ok(Theme::Bootstrap));
        assert!("tailwind".parse::<Theme>().is_err());
    }
}

//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "JASMINE_CONSOLE";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Colors from JASMINE_CONSOLE_COLORS, forced off by NO_COLOR
    pub colors: Option<bool>,
    /// Output format from JASMINE_CONSOLE_FORMAT
    pub format: Option<String>,
    /// Config file from JASMINE_CONSOLE_CONFIG
    pub config_file: Option<String>,
    /// Log filter from JASMINE_CONSOLE_LOG
    pub log: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}_{name}"));

        // https://no-color.org: any non-empty value disables color
        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        let colors = if no_color {
            Some(false)
        } else {
            get("COLORS").map(|v| parse_bool(&v))
        };

        Self {
            colors,
            format: get("FORMAT"),
            config_file: get("CONFIG"),
            log: get("LOG"),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let config = EnvConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EnvConfig::default());
    }

    #[test]
    fn test_prefixed_variables() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("JASMINE_CONSOLE_COLORS", "off"),
            ("JASMINE_CONSOLE_FORMAT", "json"),
            ("JASMINE_CONSOLE_CONFIG", "/tmp/jc.yaml"),
        ]));

        assert_eq!(config.colors, Some(false));
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.config_file.as_deref(), Some("/tmp/jc.yaml"));
    }

    #[test]
    fn test_no_color_wins() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("NO_COLOR", "1"),
            ("JASMINE_CONSOLE_COLORS", "true"),
        ]));
        assert_eq!(config.colors, Some(false));

        let config = EnvConfig::from_lookup(lookup(&[("NO_COLOR", "")]));
        assert_eq!(config.colors, None);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("YES"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("nope"));
    }
}

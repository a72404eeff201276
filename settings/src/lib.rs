use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0} is not set and no default value was provided")]
    Missing(String),
}

/// Read-only key-value state that settings are resolved against.
pub trait Source {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment of the running binary.
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Source for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting<'a> {
    pub key: &'a str,
    pub default: Option<&'a str>,
}

impl<'a> Setting<'a> {
    pub const fn required(key: &'a str) -> Self {
        Self { key, default: None }
    }

    pub const fn with_default(key: &'a str, default: &'a str) -> Self {
        Self {
            key,
            default: Some(default),
        }
    }

    /// A value in the source always wins, even an empty one. The default is
    /// only consulted when the key is absent.
    pub fn resolve(&self, source: &impl Source) -> Result<String, SettingsError> {
        match source.var(self.key) {
            Some(value) => Ok(value),
            None => self
                .default
                .map(str::to_string)
                .ok_or_else(|| SettingsError::Missing(self.key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn set_value_wins_over_default() {
        let src = source(&[("NETWORK", "sepolia")]);
        let setting = Setting::with_default("NETWORK", "rinkeby");
        assert_eq!(setting.resolve(&src), Ok("sepolia".to_string()));
    }

    #[test]
    fn absent_key_falls_back_to_default() {
        let setting = Setting::with_default("NETWORK", "rinkeby");
        assert_eq!(setting.resolve(&source(&[])), Ok("rinkeby".to_string()));
    }

    #[test]
    fn absent_key_without_default_is_an_error() {
        let err = Setting::required("ALCHEMY_KEY")
            .resolve(&source(&[]))
            .unwrap_err();
        assert_eq!(err, SettingsError::Missing("ALCHEMY_KEY".to_string()));
        assert!(err.to_string().contains("ALCHEMY_KEY"));
    }

    #[test]
    fn empty_value_counts_as_present() {
        let src = source(&[("ALCHEMY_KEY", "")]);
        let setting = Setting::required("ALCHEMY_KEY");
        assert_eq!(setting.resolve(&src), Ok(String::new()));
    }

    #[test]
    fn empty_default_is_a_real_default() {
        let setting = Setting::with_default("NETWORK", "");
        assert_eq!(setting.resolve(&source(&[])), Ok(String::new()));
    }

    proptest! {
        #[test]
        fn resolves_any_set_value(
            key in "[A-Z][A-Z0-9_]{0,15}",
            value in ".*",
            default in proptest::option::of(".*"),
        ) {
            let src = source(&[(key.as_str(), value.as_str())]);
            let setting = Setting { key: key.as_str(), default: default.as_deref() };
            prop_assert_eq!(setting.resolve(&src), Ok(value));
        }

        #[test]
        fn default_applies_only_when_absent(key in "[A-Z][A-Z0-9_]{0,15}", default in ".*") {
            let setting = Setting::with_default(key.as_str(), default.as_str());
            prop_assert_eq!(setting.resolve(&source(&[])), Ok(default.clone()));
        }

        #[test]
        fn missing_key_is_named_in_the_error(key in "[A-Z][A-Z0-9_]{0,15}") {
            let err = Setting::required(key.as_str()).resolve(&source(&[])).unwrap_err();
            prop_assert_eq!(err, SettingsError::Missing(key));
        }
    }
}

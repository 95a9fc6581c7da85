//! Motion config read from the page.
//!
//! The config lives as JSON in `<body data-motion-config="...">`. A missing
//! or blank attribute means defaults.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use motion::config::MotionConfig;
use motion::error::ConfigError;

/// Parse the config attribute's raw value.
///
/// # Errors
///
/// Returns the [`ConfigError`] from [`MotionConfig::from_json`] for a present
/// but invalid value.
pub fn config_from_attr(raw: Option<&str>) -> Result<MotionConfig, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(MotionConfig::default()),
        Some(json) => MotionConfig::from_json(json),
    }
}

/// Like [`config_from_attr`], falling back to defaults on error.
///
/// Returns the error alongside so the caller can log it.
pub fn config_or_default(raw: Option<&str>) -> (MotionConfig, Option<ConfigError>) {
    match config_from_attr(raw) {
        Ok(config) => (config, None),
        Err(err) => (MotionConfig::default(), Some(err)),
    }
}

#![forbid(unsafe_code)]

//! Tunables for keyboard stepping.

use crate::constants::numbers;

/// Keyboard stepping configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Number of key steps covered by PageUp/PageDown (default: 4).
    pub page_factor: f64,
    /// Key step when the slider is continuous (default: 1).
    pub default_key_step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            page_factor: numbers::PAGE_FACTOR,
            default_key_step: numbers::DEFAULT_KEY_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SliderConfig;

    #[test]
    fn defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.page_factor, 4.0);
        assert_eq!(config.default_key_step, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SliderConfig = serde_json::from_str(r#"{"page_factor": 10.0}"#)
            .expect("config should deserialize");
        assert_eq!(config.page_factor, 10.0);
        assert_eq!(config.default_key_step, 1.0);
    }
}

//! Configuration management and validation.
//!
//! Provides the configuration structure controlling how decoded reports are
//! rendered: whether translated groups carry their raw code, and which
//! marker joins the lines of multi-line trend output.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Rendering configuration for the report decoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Append the raw group code in parentheses after translated wind,
    /// weather, recent-weather and NOSIG fields (e.g. "calm (00000KT)")
    pub append_raw_codes: bool,

    /// Marker inserted between lines of multi-line trend forecast output
    ///
    /// The CLI uses a newline; an embedding presentation layer may prefer
    /// a markup break such as "<br>".
    pub trend_line_break: String,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            append_raw_codes: true,
            trend_line_break: "\n".to_string(),
        }
    }
}

impl DecodeConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.trend_line_break.is_empty() {
            return Err(Error::configuration(
                "trend_line_break cannot be empty: trend blocks would run together",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DecodeConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.append_raw_codes);
        assert_eq!(config.trend_line_break, "\n");
    }

    #[test]
    fn test_empty_line_break_rejected() {
        let config = DecodeConfig {
            trend_line_break: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = DecodeConfig {
            append_raw_codes: false,
            trend_line_break: "<br>".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: DecodeConfig = serde_json::from_str(&json).unwrap();
        assert!(!restored.append_raw_codes);
        assert_eq!(restored.trend_line_break, "<br>");
    }
}

//! Numerix Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Numerix crates.

use serde::{Deserialize, Serialize};

/// Configuration for numeric evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericConfig {
    /// What to do when a character sum or difference leaves the byte range
    pub char_overflow: CharOverflowPolicy,
    /// How values are rendered to text
    pub render: RenderConfig,
}

/// Policy for CharCode ⊕ CharCode results outside `[0, 255]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharOverflowPolicy {
    /// Clamp into `[0, 255]`
    #[default]
    Clamp,
    /// Fail with a conversion overflow
    Reject,
}

/// Configuration for string rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Fixed number of fractional digits for floats.
    /// `None` renders the shortest exact decimal text.
    pub precision: Option<usize>,
}

/// Evaluation phase, used for phase-specific log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Promotion,
    Arithmetic,
    Comparison,
    Render,
}

impl Phase {
    /// All phases, in evaluation order
    pub const ALL: [Phase; 4] = [
        Phase::Promotion,
        Phase::Arithmetic,
        Phase::Comparison,
        Phase::Render,
    ];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Promotion => "promotion",
            Phase::Arithmetic => "arithmetic",
            Phase::Comparison => "comparison",
            Phase::Render => "render",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("numerix::{}", self.as_str())
    }
}

impl NumericConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl RenderConfig {
    /// Render with exactly `digits` fractional digits
    pub fn fixed(digits: usize) -> Self {
        Self {
            precision: Some(digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_numeric_config() {
        let cfg = NumericConfig::default();
        assert_eq!(cfg.char_overflow, CharOverflowPolicy::Clamp);
        assert_eq!(cfg.render.precision, None);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Promotion.as_str(), "promotion");
        assert_eq!(Phase::Render.target(), "numerix::render");
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = NumericConfig::from_json(r#"{ "char_overflow": "reject" }"#).unwrap();
        assert_eq!(cfg.char_overflow, CharOverflowPolicy::Reject);
        assert_eq!(cfg.render, RenderConfig::default());

        let cfg = NumericConfig::from_json(r#"{ "render": { "precision": 6 } }"#).unwrap();
        assert_eq!(cfg.render, RenderConfig::fixed(6));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(NumericConfig::from_json(r#"{ "wrap": true }"#).is_err());
        assert!(NumericConfig::from_json(r#"{ "char_overflow": "wrap" }"#).is_err());
    }
}

//! Numeric slider inputs and their coercion.

use lectern_error::ParameterError;
use serde::{Deserialize, Serialize};

/// Range, step and default of a form slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    /// Lowest selectable value
    pub min: f64,
    /// Highest selectable value
    pub max: f64,
    /// Increment between selectable values
    pub step: f64,
    /// Initial value
    pub default: f64,
}

/// Bounds of the "Max tokens" slider.
pub const MAX_TOKENS: SliderBounds = SliderBounds {
    min: 64.0,
    max: 800.0,
    step: 16.0,
    default: 350.0,
};

/// Bounds of the "Temperature" slider.
pub const TEMPERATURE: SliderBounds = SliderBounds {
    min: 0.1,
    max: 1.2,
    step: 0.1,
    default: 0.4,
};

/// A slider value as submitted by the form layer.
///
/// HTML forms send every field as text while JSON clients send numbers, so
/// both shapes are accepted and coerced at the point of use.
///
/// # Examples
///
/// ```
/// use lectern_core::SliderValue;
///
/// assert_eq!(SliderValue::from(350.9).to_max_tokens().unwrap(), 350);
/// assert_eq!(SliderValue::from(" 512 ").to_max_tokens().unwrap(), 512);
/// assert!((SliderValue::from("0.4").to_temperature().unwrap() - 0.4).abs() < f32::EPSILON);
/// assert!(SliderValue::from("warm").to_temperature().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderValue {
    /// Already-typed number
    Number(f64),
    /// String-encoded number
    Text(String),
}

impl SliderValue {
    /// Coerces to a token count, truncating fractional numbers toward zero.
    ///
    /// # Errors
    ///
    /// Returns an error for negative, non-finite or out-of-range numbers and
    /// for text that is not an integer literal.
    pub fn to_max_tokens(&self) -> Result<u32, ParameterError> {
        match self {
            SliderValue::Number(n) => {
                let truncated = n.trunc();
                if truncated.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&truncated) {
                    Ok(truncated as u32)
                } else {
                    Err(ParameterError::new("max_tokens", n.to_string()))
                }
            }
            SliderValue::Text(s) => s
                .trim()
                .parse::<u32>()
                .map_err(|_| ParameterError::new("max_tokens", s.clone())),
        }
    }

    /// Coerces to a sampling temperature.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite values and text that is not a number.
    pub fn to_temperature(&self) -> Result<f32, ParameterError> {
        let value = match self {
            SliderValue::Number(n) => *n as f32,
            SliderValue::Text(s) => s
                .trim()
                .parse::<f32>()
                .map_err(|_| ParameterError::new("temperature", s.clone()))?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ParameterError::new("temperature", self.to_string()))
        }
    }
}

impl std::fmt::Display for SliderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliderValue::Number(n) => write!(f, "{}", n),
            SliderValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        SliderValue::Number(value)
    }
}

impl From<u32> for SliderValue {
    fn from(value: u32) -> Self {
        SliderValue::Number(f64::from(value))
    }
}

impl From<&str> for SliderValue {
    fn from(value: &str) -> Self {
        SliderValue::Text(value.to_string())
    }
}

impl From<String> for SliderValue {
    fn from(value: String) -> Self {
        SliderValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_token_count_is_rejected() {
        let err = SliderValue::from(-16.0).to_max_tokens().unwrap_err();
        assert_eq!(err.name, "max_tokens");
        assert_eq!(err.value, "-16");
    }

    #[test]
    fn fractional_token_text_is_rejected() {
        assert!(SliderValue::from("350.0").to_max_tokens().is_err());
    }

    #[test]
    fn infinite_temperature_is_rejected() {
        assert!(SliderValue::from(f64::INFINITY).to_temperature().is_err());
        assert!(SliderValue::from("inf").to_temperature().is_err());
    }

    #[test]
    fn untagged_deserialization_accepts_both_shapes() {
        let number: SliderValue = serde_json::from_str("350").unwrap();
        let text: SliderValue = serde_json::from_str("\"350\"").unwrap();
        assert_eq!(number, SliderValue::Number(350.0));
        assert_eq!(text, SliderValue::Text("350".to_string()));
    }

    #[test]
    fn defaults_sit_inside_bounds() {
        for bounds in [MAX_TOKENS, TEMPERATURE] {
            assert!(bounds.min <= bounds.default && bounds.default <= bounds.max);
        }
    }
}

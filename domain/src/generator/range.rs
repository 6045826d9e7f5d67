//! Range input value object

use super::entities::NumberRequest;
use crate::core::error::DomainError;

/// Initial text of the min field
pub const DEFAULT_MIN: &str = "1";

/// Initial text of the max field
pub const DEFAULT_MAX: &str = "10";

/// The raw text of the min/max fields as the user typed it.
///
/// The text is kept unparsed so the fields can hold intermediate values
/// (`""`, `"-"`) while editing. [`RangeInput::parse`] is the validity gate
/// in front of every number request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeInput {
    min: String,
    max: String,
}

impl Default for RangeInput {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX)
    }
}

impl RangeInput {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn min(&self) -> &str {
        &self.min
    }

    pub fn max(&self) -> &str {
        &self.max
    }

    pub fn set_min(&mut self, text: impl Into<String>) {
        self.min = text.into();
    }

    pub fn set_max(&mut self, text: impl Into<String>) {
        self.max = text.into();
    }

    pub fn min_mut(&mut self) -> &mut String {
        &mut self.min
    }

    pub fn max_mut(&mut self) -> &mut String {
        &mut self.max
    }

    /// Parse both fields into a request.
    ///
    /// Both fields must be non-blank and numeric after trimming. Integral
    /// decimal or exponent forms (`"1.0"`, `"1e1"`) are accepted and sent
    /// as integers; fractional values (`"1.5"`) are rejected. The ordering of `min` and `max` is left to the backend.
    pub fn parse(&self) -> Result<NumberRequest, DomainError> {
        let min = parse_field(&self.min)?;
        let max = parse_field(&self.max)?;
        Ok(NumberRequest::new(min, max))
    }

    /// Whether [`RangeInput::parse`] would succeed
    pub fn is_valid(&self) -> bool {
        self.parse().is_ok()
    }
}

fn parse_field(text: &str) -> Result<i64, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidNumbers);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let value: f64 = trimmed.parse().map_err(|_| DomainError::InvalidNumbers)?;
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        Ok(value as i64)
    } else {
        Err(DomainError::InvalidNumbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = RangeInput::default();
        assert_eq!(range.min(), "1");
        assert_eq!(range.max(), "10");
        assert_eq!(range.parse().unwrap(), NumberRequest::new(1, 10));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let range = RangeInput::new(" -5 ", "\t42");
        assert_eq!(range.parse().unwrap(), NumberRequest::new(-5, 42));
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            RangeInput::new("", "10").parse(),
            Err(DomainError::InvalidNumbers)
        );
        assert_eq!(
            RangeInput::new("1", "   ").parse(),
            Err(DomainError::InvalidNumbers)
        );
    }

    #[test]
    fn test_non_numeric_fields_rejected() {
        assert!(!RangeInput::new("abc", "10").is_valid());
        assert!(!RangeInput::new("1", "ten").is_valid());
        assert!(!RangeInput::new("-", "10").is_valid());
        assert!(!RangeInput::new("1.5", "10").is_valid());
        assert!(!RangeInput::new("1", "2.25").is_valid());
        assert!(!RangeInput::new("inf", "10").is_valid());
        assert!(!RangeInput::new("1", "NaN").is_valid());
        assert!(!RangeInput::new("1e30", "10").is_valid());
    }

    #[test]
    fn test_integral_decimal_and_exponent_forms_accepted() {
        assert_eq!(
            RangeInput::new("1.0", "10").parse().unwrap(),
            NumberRequest::new(1, 10)
        );
        assert_eq!(
            RangeInput::new("1e1", "20").parse().unwrap(),
            NumberRequest::new(10, 20)
        );
        assert_eq!(
            RangeInput::new(" 10.0 ", "-2.0").parse().unwrap(),
            NumberRequest::new(10, -2)
        );
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let range = RangeInput::new("10", "1");
        assert_eq!(range.parse().unwrap(), NumberRequest::new(10, 1));
    }

    #[test]
    fn test_editing_through_mut_accessors() {
        let mut range = RangeInput::default();
        range.min_mut().push('5');
        range.max_mut().clear();
        assert_eq!(range.min(), "15");
        assert!(!range.is_valid());

        range.set_max("20");
        assert!(range.is_valid());
    }
}

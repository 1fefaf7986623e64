//! Parsing of free-text numeric input
//!
//! The core functions only ever see finite `f64` values; anything else is
//! rejected here with `CoordError::InvalidNumber`.

use log::debug;

use crate::errors::{CoordError, CoordResult};

/// Parse one text field as a finite real number
pub fn parse_number(text: &str) -> CoordResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            debug!("Rejected numeric input: {:?}", text);
            Err(CoordError::InvalidNumber(text.to_string()))
        }
    }
}

/// Parse three text fields, failing on the first invalid one
pub fn parse_triple(a: &str, b: &str, c: &str) -> CoordResult<(f64, f64, f64)> {
    Ok((parse_number(a)?, parse_number(b)?, parse_number(c)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_reals() {
        assert_eq!(parse_number("3").unwrap(), 3.0);
        assert_eq!(parse_number(" -2.5 ").unwrap(), -2.5);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_number_rejects_garbage_and_non_finite() {
        for text in ["", "abc", "1,5", "NaN", "inf", "-infinity"] {
            assert!(
                matches!(parse_number(text), Err(CoordError::InvalidNumber(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_triple_reports_first_bad_field() {
        match parse_triple("1", "x", "y") {
            Err(CoordError::InvalidNumber(text)) => assert_eq!(text, "x"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(parse_triple("1", "2", "3").unwrap(), (1.0, 2.0, 3.0));
    }
}

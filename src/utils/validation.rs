use crate::utils::error::{CatalogError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Two digit groups joined by a hyphen, e.g. `2643-5354`. The last digit may
/// be an `X` check digit.
pub fn validate_issn(field_name: &str, value: &str) -> Result<()> {
    static ISSN: OnceLock<Regex> = OnceLock::new();
    let re = ISSN.get_or_init(|| {
        Regex::new(r"^\d{3,4}-\d{2,3}[\dXx]$").expect("static ISSN pattern")
    });

    if !re.is_match(value) {
        return Err(invalid(field_name, value, "Expected an ISSN like 1234-5678"));
    }
    Ok(())
}

pub fn validate_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            field_name,
            value,
            "Price must be a finite, non-negative number",
        ));
    }
    Ok(())
}

pub fn validate_position(field_name: &str, position: usize, len: usize) -> Result<()> {
    if position >= len {
        return Err(invalid(
            field_name,
            position,
            format!("Position must be below {}", len),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_issn() {
        assert!(validate_issn("issn", "2643-5354").is_ok());
        assert!(validate_issn("issn", "243-5345").is_ok());
        assert!(validate_issn("issn", "2543-535").is_ok());
        assert!(validate_issn("issn", "0317-847X").is_ok());
        assert!(validate_issn("issn", "").is_err());
        assert!(validate_issn("issn", "26435354").is_err());
        assert!(validate_issn("issn", "abcd-efgh").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 0.0).is_ok());
        assert!(validate_price("price", 45.65).is_ok());
        assert!(validate_price("price", -0.01).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
        assert!(validate_price("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_position() {
        assert!(validate_position("articles", 0, 1).is_ok());
        assert!(validate_position("articles", 1, 1).is_err());
        assert!(validate_position("articles", 0, 0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Nature").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}

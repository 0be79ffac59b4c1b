use crate::utils::error::{FragmentError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FragmentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FragmentError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FragmentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FragmentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Snapshot checks. These report `InvalidInput` rather than a config error
/// because the values come from the commerce engine on every request.
pub fn validate_item_count(field_name: &str, count: i64) -> Result<()> {
    if count < 0 {
        return Err(FragmentError::invalid_input(
            field_name,
            format!("count must not be negative (got {})", count),
        ));
    }
    Ok(())
}

pub fn validate_cart_url(field_name: &str, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(FragmentError::invalid_input(
            field_name,
            "URL cannot be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("shop.base_url", "https://example.com").is_ok());
        assert!(validate_url("shop.base_url", "http://example.com").is_ok());
        assert!(validate_url("shop.base_url", "").is_err());
        assert!(validate_url("shop.base_url", "invalid-url").is_err());
        assert!(validate_url("shop.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_item_count() {
        assert!(validate_item_count("item_count", 0).is_ok());
        assert!(validate_item_count("item_count", 12).is_ok());
        assert!(matches!(
            validate_item_count("item_count", -1),
            Err(FragmentError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_cart_url() {
        assert!(validate_cart_url("cart_url", "/cart").is_ok());
        assert!(validate_cart_url("cart_url", "").is_err());
        assert!(validate_cart_url("cart_url", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("badge.title", "My Basket").is_ok());
        assert!(validate_non_empty_string("badge.title", " ").is_err());
    }
}

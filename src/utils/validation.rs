use crate::utils::error::{Result, ToolkitError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ToolkitError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Route entries are absolute paths without query or fragment.
pub fn validate_route_path(field_name: &str, path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must start with '/'".to_string(),
        });
    }

    if path.contains(['?', '#']) || path.chars().any(char::is_whitespace) {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot contain a query, fragment or whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("lookup.endpoint", "https://viacep.com.br/ws").is_ok());
        assert!(validate_url("lookup.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("lookup.endpoint", "").is_err());
        assert!(validate_url("lookup.endpoint", "invalid-url").is_err());
        assert!(validate_url("lookup.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_route_path() {
        assert!(validate_route_path("gate.login_path", "/auth/login").is_ok());
        assert!(validate_route_path("gate.login_path", "auth/login").is_err());
        assert!(validate_route_path("gate.login_path", "/auth?x=1").is_err());
        assert!(validate_route_path("gate.login_path", "/a b").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("lookup.timeout_seconds", 10, 1, 120).is_ok());
        assert!(validate_range("lookup.timeout_seconds", 0, 1, 120).is_err());
        assert!(validate_range("lookup.timeout_seconds", 121, 1, 120).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("gate.cookie_name", "auth_token").is_ok());
        assert!(validate_non_empty_string("gate.cookie_name", "   ").is_err());
    }
}

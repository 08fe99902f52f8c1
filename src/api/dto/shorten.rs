//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Only emptiness is checked.
    #[validate(length(min = 1, message = "Long URL is required"))]
    pub long_url: String,
}

/// Response with the generated short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_long_url_fails_validation() {
        let request = ShortenRequest {
            long_url: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("long_url"));
    }

    #[test]
    fn test_any_non_empty_long_url_passes() {
        for url in ["https://example.com", "not even a url", " "] {
            let request = ShortenRequest {
                long_url: url.to_string(),
            };
            assert!(request.validate().is_ok(), "{url:?} should pass");
        }
    }
}

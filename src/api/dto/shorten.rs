//! DTOs for link shortening and resolution endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL, stored verbatim.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// A short URL, or in the case of resolution the original one.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UrlResponse {
    pub url: String,
}

/// Request to shorten several URLs at once.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchShortenRequest {
    #[validate(nested)]
    pub links: Vec<ShortenRequest>,
}

/// Short URLs in the order of the request.
#[derive(Debug, Serialize)]
pub struct BatchShortenResponse {
    pub links: Vec<UrlResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_invalid() {
        let request = ShortenRequest { url: String::new() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_batch_validates_every_item() {
        let request: BatchShortenRequest = serde_json::from_str(
            r#"{"links": [{"url": "https://example.com"}, {"url": ""}]}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("links"));
    }

    #[test]
    fn test_batch_of_valid_urls() {
        let request: BatchShortenRequest =
            serde_json::from_str(r#"{"links": [{"url": "a"}, {"url": "b"}]}"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.links.len(), 2);
    }
}

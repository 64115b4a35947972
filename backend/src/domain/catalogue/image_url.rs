//! Externally hosted donut image location.

use url::Url;

use super::validation::{validate_max_chars, validate_non_empty_field};
use super::{CatalogueValidationError, IMAGE_URL_MAX_CHARS};

const FIELD: &str = "donut.image";

/// Absolute `http` or `https` URL pointing at a donut photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Validate and construct an image URL.
    ///
    /// The original text is kept verbatim so templates render exactly what
    /// was stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donut_shop::domain::ImageUrl;
    ///
    /// let url = ImageUrl::new("https://cdn.example.test/glazed.png").expect("valid url");
    /// assert_eq!(url.as_str(), "https://cdn.example.test/glazed.png");
    /// assert!(ImageUrl::new("ftp://cdn.example.test/glazed.png").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        let value = validate_non_empty_field(value.into(), FIELD)?;
        let value = validate_max_chars(value, FIELD, IMAGE_URL_MAX_CHARS)?;
        let parsed = Url::parse(value.trim()).map_err(|err| CatalogueValidationError::InvalidUrl {
            field: FIELD,
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogueValidationError::InvalidUrl {
                field: FIELD,
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }
        Ok(Self(value))
    }

    /// Wrap a URL read back from storage without re-validating it.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

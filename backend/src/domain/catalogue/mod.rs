//! Donut catalogue domain types.
//!
//! A catalogue is a set of [`DonutType`] categories and the [`Donut`]
//! products filed under them. Every donut references exactly one type, and
//! removing a type removes its donuts; adapters enforce that cascade.

mod donut;
mod donut_type;
mod image_url;
mod price;
mod validation;

#[cfg(test)]
mod tests;

pub use donut::{Donut, DonutDraft, NewDonut, NewDonutDraft};
pub use donut_type::{DonutType, DonutTypeName, TypeFilter};
pub use image_url::ImageUrl;
pub use price::Price;

/// Maximum length, in characters, of donut and donut type names.
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum length, in characters, of a donut image URL.
pub const IMAGE_URL_MAX_CHARS: usize = 200;

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueValidationError {
    /// A required text field was blank.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    /// A text field exceeded its storage limit.
    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// A numeric field that must be non-negative was negative.
    #[error("{field} must be non-negative (got {value})")]
    NegativeValue { field: &'static str, value: i32 },
    /// A URL field failed to parse or used an unsupported scheme.
    #[error("{field} is not a valid http(s) URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
}

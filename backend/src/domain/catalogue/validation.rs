//! Validation helpers shared by catalogue entities.

use super::CatalogueValidationError;

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    Ok(value)
}

pub(super) fn validate_max_chars(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, CatalogueValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(CatalogueValidationError::TooLong { field, max, actual });
    }
    Ok(value)
}

pub(super) fn validate_name(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, CatalogueValidationError> {
    validate_non_empty_field(value, field).and_then(|value| validate_max_chars(value, field, max))
}

pub(super) fn ensure_non_negative(
    value: i32,
    field: &'static str,
) -> Result<(), CatalogueValidationError> {
    if value < 0 {
        return Err(CatalogueValidationError::NegativeValue { field, value });
    }
    Ok(())
}

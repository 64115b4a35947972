//! Donut categories and the filter used to browse them.

use std::fmt;

use super::validation::validate_name;
use super::{CatalogueValidationError, NAME_MAX_CHARS};

/// Unique, human-readable category name such as `glazed`.
///
/// Names are compared exactly; `Glazed` and `glazed` are different types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DonutTypeName(String);

impl DonutTypeName {
    /// Validate and construct a type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donut_shop::domain::DonutTypeName;
    ///
    /// let name = DonutTypeName::new("glazed").expect("valid name");
    /// assert_eq!(name.as_str(), "glazed");
    /// assert!(DonutTypeName::new("  ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        validate_name(value.into(), "donut_type.name", NAME_MAX_CHARS).map(Self)
    }

    /// Wrap a name read back from storage without re-validating it.
    ///
    /// Rows may be written by other tools whose rules differ from
    /// [`DonutTypeName::new`]; whatever the schema accepted is listed as is.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DonutTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DonutTypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Stored donut category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DonutType {
    id: i32,
    name: DonutTypeName,
}

impl DonutType {
    pub fn new(id: i32, name: DonutTypeName) -> Self {
        Self { id, name }
    }

    /// Storage-assigned identifier; ascending ids follow insertion order.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &DonutTypeName {
        &self.name
    }
}

/// Which donuts a catalogue page should list.
///
/// The reserved segment `all` selects every donut. Any other value selects
/// donuts of the type with exactly that name; a name that matches nothing is
/// not an error and simply yields an empty listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Named(String),
}

impl TypeFilter {
    /// Path segment value that selects every donut.
    pub const ALL: &'static str = "all";

    /// Interpret a raw path segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donut_shop::domain::TypeFilter;
    ///
    /// assert_eq!(TypeFilter::from_segment("all"), TypeFilter::All);
    /// assert_eq!(
    ///     TypeFilter::from_segment("glazed"),
    ///     TypeFilter::Named("glazed".to_owned())
    /// );
    /// ```
    pub fn from_segment(segment: impl Into<String>) -> Self {
        let segment = segment.into();
        if segment == Self::ALL {
            Self::All
        } else {
            Self::Named(segment)
        }
    }

    /// Name echoed back to templates to highlight the active filter.
    pub fn selected_name(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Named(name) => name.as_str(),
        }
    }
}

//! Donut prices stored in minor currency units.

use std::fmt;

use super::CatalogueValidationError;
use super::validation::ensure_non_negative;

/// Non-negative price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i32);

impl Price {
    /// Validate and construct a price from a number of cents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donut_shop::domain::Price;
    ///
    /// let price = Price::from_cents(150).expect("non-negative price");
    /// assert_eq!(price.cents(), 150);
    /// assert!(Price::from_cents(-1).is_err());
    /// ```
    pub fn from_cents(cents: i32) -> Result<Self, CatalogueValidationError> {
        ensure_non_negative(cents, "donut.price")?;
        Ok(Self(cents))
    }

    /// Raw value in cents, as stored.
    pub fn cents(self) -> i32 {
        self.0
    }

    /// Display string shown on catalogue cards.
    ///
    /// The amount is printed the way a plain `cents / 100` division prints,
    /// not as a two-decimal currency amount: trailing zeros are dropped and
    /// whole amounts keep a single `.0`, so `150` renders as `$1.5` rather
    /// than `$1.50`. This looks like an unintended quirk of the existing
    /// storefront; it is kept so rendered pages stay identical.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donut_shop::domain::Price;
    ///
    /// let format = |cents| Price::from_cents(cents).expect("valid price").formatted();
    /// assert_eq!(format(150), "$1.5");
    /// assert_eq!(format(200), "$2.0");
    /// assert_eq!(format(199), "$1.99");
    /// ```
    pub fn formatted(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let fraction = self.0 % 100;
        if fraction % 10 == 0 {
            write!(f, "${whole}.{}", fraction / 10)
        } else {
            write!(f, "${whole}.{fraction:02}")
        }
    }
}

impl TryFrom<i32> for Price {
    type Error = CatalogueValidationError;

    fn try_from(cents: i32) -> Result<Self, Self::Error> {
        Self::from_cents(cents)
    }
}

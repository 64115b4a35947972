//! Donut catalogue entries.

use serde::Deserialize;

use super::validation::validate_name;
use super::{
    CatalogueValidationError, DonutType, DonutTypeName, ImageUrl, NAME_MAX_CHARS, Price,
};

/// Input payload for [`Donut::new`], typically a stored row with its type
/// already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonutDraft {
    pub id: i32,
    pub name: String,
    pub donut_type: DonutType,
    pub description: String,
    pub price: i32,
    pub image: String,
}

/// Donut listed in the catalogue, with its category resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donut {
    id: i32,
    name: String,
    donut_type: DonutType,
    description: String,
    price: Price,
    image: ImageUrl,
}

impl Donut {
    /// Validate and construct a donut.
    pub fn new(draft: DonutDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    /// Rebuild a donut read back from storage.
    ///
    /// Text fields are taken as stored, so rows written by other tools (an
    /// `ftp://` image, a blank name) still list. Only the price is checked,
    /// because formatting needs it non-negative.
    pub fn from_stored(draft: DonutDraft) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            id: draft.id,
            name: draft.name,
            donut_type: draft.donut_type,
            description: draft.description,
            price: Price::from_cents(draft.price)?,
            image: ImageUrl::from_stored(draft.image),
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn donut_type(&self) -> &DonutType {
        &self.donut_type
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn price(&self) -> Price {
        self.price
    }
    pub fn image(&self) -> &ImageUrl {
        &self.image
    }

    /// Price as shown on the storefront; see [`Price::formatted`].
    pub fn formatted_price(&self) -> String {
        self.price.formatted()
    }
}

impl TryFrom<DonutDraft> for Donut {
    type Error = CatalogueValidationError;

    fn try_from(draft: DonutDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            id: draft.id,
            name: validate_name(draft.name, "donut.name", NAME_MAX_CHARS)?,
            donut_type: draft.donut_type,
            description: draft.description,
            price: Price::from_cents(draft.price)?,
            image: ImageUrl::new(draft.image)?,
        })
    }
}

/// Unvalidated donut creation payload, as found in seed documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewDonutDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    pub price: i32,
    pub image: String,
}

/// Validated request to add a donut under an existing type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonut {
    name: String,
    type_name: DonutTypeName,
    description: String,
    price: Price,
    image: ImageUrl,
}

impl NewDonut {
    /// Validate a creation payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donut_shop::domain::{NewDonut, NewDonutDraft};
    ///
    /// let donut = NewDonut::new(NewDonutDraft {
    ///     name: "Honey Dip".to_owned(),
    ///     type_name: "glazed".to_owned(),
    ///     description: "Dipped twice".to_owned(),
    ///     price: 150,
    ///     image: "https://cdn.example.test/honey.png".to_owned(),
    /// })
    /// .expect("valid donut");
    /// assert_eq!(donut.type_name().as_str(), "glazed");
    /// ```
    pub fn new(draft: NewDonutDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn type_name(&self) -> &DonutTypeName {
        &self.type_name
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn price(&self) -> Price {
        self.price
    }
    pub fn image(&self) -> &ImageUrl {
        &self.image
    }

    /// Attach storage-assigned identity, producing the stored donut.
    pub fn into_donut(self, id: i32, donut_type: DonutType) -> Donut {
        Donut {
            id,
            name: self.name,
            donut_type,
            description: self.description,
            price: self.price,
            image: self.image,
        }
    }
}

impl TryFrom<NewDonutDraft> for NewDonut {
    type Error = CatalogueValidationError;

    fn try_from(draft: NewDonutDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validate_name(draft.name, "donut.name", NAME_MAX_CHARS)?,
            type_name: DonutTypeName::new(draft.type_name)?,
            description: draft.description,
            price: Price::from_cents(draft.price)?,
            image: ImageUrl::new(draft.image)?,
        })
    }
}

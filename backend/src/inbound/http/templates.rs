//! HTML page rendering.
//!
//! Templates are compiled into the binary and registered with a private
//! [`Tera`] instance, so rendering does not depend on the working directory.
//! The index template receives three values: `donuts`, `donutTypes` and
//! `selectedType`.

use serde::Serialize;
use tera::{Context, Tera};
use tracing::error;

use crate::domain::ports::CatalogueIndex;
use crate::domain::{Donut, DonutType, Error};

const BASE_TEMPLATE: &str = "base.html";
const INDEX_TEMPLATE: &str = "index.html";
const BIG_DONUT_TEMPLATE: &str = "big_donut.html";

#[derive(Debug, Serialize)]
struct DonutTypeView<'a> {
    id: i32,
    name: &'a str,
}

impl<'a> From<&'a DonutType> for DonutTypeView<'a> {
    fn from(value: &'a DonutType) -> Self {
        Self {
            id: value.id(),
            name: value.name().as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DonutView<'a> {
    id: i32,
    name: &'a str,
    #[serde(rename = "type")]
    donut_type: DonutTypeView<'a>,
    description: &'a str,
    price: i32,
    formatted_price: String,
    image: &'a str,
}

impl<'a> From<&'a Donut> for DonutView<'a> {
    fn from(value: &'a Donut) -> Self {
        Self {
            id: value.id(),
            name: value.name(),
            donut_type: DonutTypeView::from(value.donut_type()),
            description: value.description(),
            price: value.price().cents(),
            formatted_price: value.formatted_price(),
            image: value.image().as_str(),
        }
    }
}

fn render_failure(template: &str, err: &tera::Error) -> Error {
    error!(template, error = ?err, "template rendering failed");
    Error::internal(format!("failed to render {template}"))
}

/// Renders storefront pages from the bundled templates.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Compile the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns the Tera error when a bundled template fails to parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (BASE_TEMPLATE, include_str!("../../../templates/base.html")),
            (INDEX_TEMPLATE, include_str!("../../../templates/index.html")),
            (
                BIG_DONUT_TEMPLATE,
                include_str!("../../../templates/big_donut.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    /// Render the catalogue listing.
    pub fn render_index(&self, index: &CatalogueIndex) -> Result<String, Error> {
        let donuts: Vec<DonutView<'_>> = index.donuts.iter().map(DonutView::from).collect();
        let donut_types: Vec<DonutTypeView<'_>> =
            index.donut_types.iter().map(DonutTypeView::from).collect();

        let mut ctx = Context::new();
        ctx.insert("donuts", &donuts);
        ctx.insert("donutTypes", &donut_types);
        ctx.insert("selectedType", &index.selected_type);

        self.tera
            .render(INDEX_TEMPLATE, &ctx)
            .map_err(|err| render_failure(INDEX_TEMPLATE, &err))
    }

    /// Render the static 3D donut page.
    pub fn render_big_donut(&self) -> Result<String, Error> {
        self.tera
            .render(BIG_DONUT_TEMPLATE, &Context::new())
            .map_err(|err| render_failure(BIG_DONUT_TEMPLATE, &err))
    }
}

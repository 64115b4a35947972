//! Storefront pages.
//!
//! ```text
//! GET /                    every donut
//! GET /type/{type_name}    donuts of one type; `all` lists every donut
//! GET /big-donut           static 3D donut page
//! ```
//!
//! An unknown type name renders an empty listing with status 200.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::domain::TypeFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

async fn render_catalogue(state: &HttpState, filter: TypeFilter) -> ApiResult<HttpResponse> {
    let listing = state.catalogue.index(&filter).await?;
    let body = state.pages.render_index(&listing)?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

/// Catalogue landing page listing every donut.
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_catalogue(&state, TypeFilter::All).await
}

/// Catalogue page filtered to a single donut type.
#[get("/type/{type_name}")]
pub async fn index_by_type(
    state: web::Data<HttpState>,
    type_name: web::Path<String>,
) -> ApiResult<HttpResponse> {
    render_catalogue(&state, TypeFilter::from_segment(type_name.into_inner())).await
}

#[get("/big-donut")]
pub async fn big_donut(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let body = state.pages.render_big_donut()?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

/// Register the storefront routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(index_by_type).service(big_donut);
}

#[cfg(test)]
mod tests;

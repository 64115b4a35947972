//! Handler tests driven through a mocked catalogue port.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{CatalogueIndex, MockCataloguePageQuery};
use crate::domain::{Donut, DonutDraft, DonutType, DonutTypeName, Error};
use crate::inbound::http::templates::PageRenderer;

fn donut_type(id: i32, name: &str) -> DonutType {
    DonutType::new(id, DonutTypeName::new(name).expect("valid type name"))
}

fn donut(id: i32, name: &str, price: i32, donut_type: &DonutType) -> Donut {
    Donut::new(DonutDraft {
        id,
        name: name.to_owned(),
        donut_type: donut_type.clone(),
        description: format!("{name} description"),
        price,
        image: format!("https://cdn.example.test/{id}.png"),
    })
    .expect("valid donut")
}

#[fixture]
fn types() -> Vec<DonutType> {
    vec![donut_type(1, "glazed"), donut_type(2, "filled")]
}

async fn get(query: MockCataloguePageQuery, uri: &str) -> (StatusCode, String) {
    let state = HttpState::new(
        Arc::new(query),
        PageRenderer::new().expect("templates compile"),
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (
        status,
        String::from_utf8(body.to_vec()).expect("utf8 body"),
    )
}

fn expect_index(
    query: &mut MockCataloguePageQuery,
    expected: TypeFilter,
    listing: CatalogueIndex,
) {
    query
        .expect_index()
        .withf(move |filter: &TypeFilter| *filter == expected)
        .times(1)
        .return_once(move |_| Ok(listing));
}

#[rstest]
#[actix_web::test]
async fn root_lists_every_donut(types: Vec<DonutType>) {
    let glazed = types.first().cloned().expect("fixture type");
    let filled = types.get(1).cloned().expect("fixture type");
    let mut query = MockCataloguePageQuery::new();
    expect_index(
        &mut query,
        TypeFilter::All,
        CatalogueIndex {
            donuts: vec![
                donut(1, "Original Glazed", 150, &glazed),
                donut(2, "Boston Cream", 200, &filled),
            ],
            donut_types: types,
            selected_type: "all".to_owned(),
        },
    );

    let (status, body) = get(query, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Original Glazed"));
    assert!(body.contains("Boston Cream"));
    assert!(body.contains("$1.5"));
    assert!(body.contains("$2.0"));
}

#[rstest]
#[case("/type/filled", TypeFilter::Named("filled".to_owned()))]
#[case("/type/all", TypeFilter::All)]
#[case("/type/Glazed%20Twist", TypeFilter::Named("Glazed Twist".to_owned()))]
#[actix_web::test]
async fn type_segment_selects_the_filter(
    types: Vec<DonutType>,
    #[case] uri: &str,
    #[case] expected: TypeFilter,
) {
    let selected = expected.selected_name().to_owned();
    let mut query = MockCataloguePageQuery::new();
    expect_index(
        &mut query,
        expected,
        CatalogueIndex {
            donuts: Vec::new(),
            donut_types: types,
            selected_type: selected,
        },
    );

    let (status, _) = get(query, uri).await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn unknown_type_renders_empty_listing_with_all_types(types: Vec<DonutType>) {
    let mut query = MockCataloguePageQuery::new();
    expect_index(
        &mut query,
        TypeFilter::Named("nonexistent-type".to_owned()),
        CatalogueIndex {
            donuts: Vec::new(),
            donut_types: types,
            selected_type: "nonexistent-type".to_owned(),
        },
    );

    let (status, body) = get(query, "/type/nonexistent-type").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No donuts here yet."));
    assert!(body.contains("href=\"/type/glazed\""));
    assert!(body.contains("href=\"/type/filled\""));
}

#[rstest]
#[actix_web::test]
async fn big_donut_does_not_touch_the_catalogue() {
    let mut query = MockCataloguePageQuery::new();
    query.expect_index().never();

    let (status, body) = get(query, "/big-donut").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"big-donut\""));
}

#[rstest]
#[case(Error::service_unavailable("catalogue repository unavailable"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("catalogue repository error: syntax"), StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn catalogue_failures_surface_as_server_errors(
    #[case] failure: Error,
    #[case] expected: StatusCode,
) {
    let mut query = MockCataloguePageQuery::new();
    query
        .expect_index()
        .times(1)
        .return_once(move |_| Err(failure));

    let (status, body) = get(query, "/").await;

    assert_eq!(status, expected);
    assert!(!body.contains("syntax"));
}

//! Validation and formatting coverage for catalogue entities.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn glazed() -> DonutType {
    DonutType::new(1, DonutTypeName::new("glazed").expect("valid type name"))
}

#[fixture]
fn draft(glazed: DonutType) -> DonutDraft {
    DonutDraft {
        id: 7,
        name: "Original Glazed".to_owned(),
        donut_type: glazed,
        description: "Light and airy".to_owned(),
        price: 150,
        image: "https://cdn.example.test/original.png".to_owned(),
    }
}

#[rstest]
#[case(150, "$1.5")]
#[case(200, "$2.0")]
#[case(199, "$1.99")]
#[case(105, "$1.05")]
#[case(5, "$0.05")]
#[case(0, "$0.0")]
#[case(12_340, "$123.4")]
fn price_formats_like_raw_division(#[case] cents: i32, #[case] expected: &str) {
    let price = Price::from_cents(cents).expect("non-negative price");
    assert_eq!(price.formatted(), expected);
}

#[rstest]
fn price_rejects_negative_cents() {
    let err = Price::from_cents(-5).expect_err("negative price rejected");
    assert_eq!(
        err,
        CatalogueValidationError::NegativeValue {
            field: "donut.price",
            value: -5
        }
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn type_name_rejects_blank_values(#[case] value: &str) {
    assert!(matches!(
        DonutTypeName::new(value),
        Err(CatalogueValidationError::EmptyField { .. })
    ));
}

#[rstest]
fn type_name_enforces_length_limit() {
    let at_limit = "a".repeat(NAME_MAX_CHARS);
    assert!(DonutTypeName::new(at_limit).is_ok());

    let too_long = "a".repeat(NAME_MAX_CHARS + 1);
    assert!(matches!(
        DonutTypeName::new(too_long),
        Err(CatalogueValidationError::TooLong { max: NAME_MAX_CHARS, .. })
    ));
}

#[rstest]
fn type_name_preserves_case() {
    let upper = DonutTypeName::new("Glazed").expect("valid name");
    let lower = DonutTypeName::new("glazed").expect("valid name");
    assert_ne!(upper, lower);
}

#[rstest]
#[case("https://cdn.example.test/a.png")]
#[case("http://cdn.example.test/a.png")]
fn image_url_accepts_web_urls(#[case] value: &str) {
    let url = ImageUrl::new(value).expect("valid image url");
    assert_eq!(url.as_str(), value);
}

#[rstest]
#[case("not a url")]
#[case("/relative/path.png")]
#[case("data:image/png;base64,AAAA")]
fn image_url_rejects_non_web_urls(#[case] value: &str) {
    assert!(matches!(
        ImageUrl::new(value),
        Err(CatalogueValidationError::InvalidUrl { .. })
    ));
}

#[rstest]
fn image_url_enforces_length_limit() {
    let long = format!("https://cdn.example.test/{}", "x".repeat(IMAGE_URL_MAX_CHARS));
    assert!(matches!(
        ImageUrl::new(long),
        Err(CatalogueValidationError::TooLong { .. })
    ));
}

#[rstest]
fn donut_exposes_resolved_type_and_formatted_price(draft: DonutDraft, glazed: DonutType) {
    let donut = Donut::new(draft).expect("valid donut");
    assert_eq!(donut.id(), 7);
    assert_eq!(donut.donut_type(), &glazed);
    assert_eq!(donut.formatted_price(), "$1.5");
}

#[rstest]
fn donut_rejects_negative_price(mut draft: DonutDraft) {
    draft.price = -1;
    assert!(Donut::new(draft).is_err());
}

#[rstest]
fn donut_rejects_blank_name(mut draft: DonutDraft) {
    draft.name = " ".to_owned();
    assert!(matches!(
        Donut::new(draft),
        Err(CatalogueValidationError::EmptyField { field: "donut.name" })
    ));
}

#[rstest]
fn new_donut_deserialises_seed_shape() {
    let draft: NewDonutDraft = serde_json::from_value(serde_json::json!({
        "name": "Boston Cream",
        "type": "filled",
        "price": 225,
        "image": "https://cdn.example.test/boston.png"
    }))
    .expect("seed payload deserialises");
    let donut = NewDonut::new(draft).expect("valid donut");
    assert_eq!(donut.type_name().as_str(), "filled");
    assert_eq!(donut.description(), "");
    assert_eq!(donut.price().formatted(), "$2.25");
}

#[rstest]
fn new_donut_into_donut_keeps_fields(glazed: DonutType) {
    let new_donut = NewDonut::new(NewDonutDraft {
        name: "Maple Bar".to_owned(),
        type_name: "glazed".to_owned(),
        description: "Maple frosting".to_owned(),
        price: 200,
        image: "https://cdn.example.test/maple.png".to_owned(),
    })
    .expect("valid donut");
    let donut = new_donut.into_donut(3, glazed);
    assert_eq!(donut.id(), 3);
    assert_eq!(donut.name(), "Maple Bar");
    assert_eq!(donut.formatted_price(), "$2.0");
}

#[rstest]
#[case("all", TypeFilter::All)]
#[case("glazed", TypeFilter::Named("glazed".to_owned()))]
#[case("All", TypeFilter::Named("All".to_owned()))]
fn type_filter_parses_path_segments(#[case] segment: &str, #[case] expected: TypeFilter) {
    let filter = TypeFilter::from_segment(segment);
    assert_eq!(filter.selected_name(), segment);
    assert_eq!(filter, expected);
}

#[rstest]
#[case("ftp://img.example/x.png")]
#[case("/media/donuts/x.png")]
fn stored_donuts_keep_text_the_constructor_would_reject(
    draft: DonutDraft,
    #[case] image: &str,
) {
    let stored = DonutDraft {
        name: String::new(),
        image: image.to_owned(),
        ..draft
    };
    assert!(Donut::new(stored.clone()).is_err());

    let donut = Donut::from_stored(stored).expect("stored row lists");
    assert_eq!(donut.name(), "");
    assert_eq!(donut.image().as_str(), image);
}

#[rstest]
fn stored_donuts_still_reject_negative_prices(draft: DonutDraft) {
    let stored = DonutDraft { price: -5, ..draft };
    assert_eq!(
        Donut::from_stored(stored),
        Err(CatalogueValidationError::NegativeValue {
            field: "donut.price",
            value: -5
        })
    );
}

#[rstest]
fn stored_type_names_are_not_revalidated() {
    assert_eq!(DonutTypeName::from_stored(String::new()).as_str(), "");
}

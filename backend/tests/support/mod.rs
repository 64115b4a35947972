//! Shared helpers for backend integration tests.
#![allow(dead_code, reason = "each integration test binary uses a subset of these helpers")]

use donut_shop::domain::{DonutTypeName, NewDonut, NewDonutDraft};

/// Environment variable naming the PostgreSQL database used by Diesel suites.
pub const TEST_DATABASE_URL_VAR: &str = "DONUT_SHOP_TEST_DATABASE_URL";

/// Return the test database URL, or print a skip marker and return `None`.
pub fn test_database_url(suite: &str) -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_VAR) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {suite} needs {TEST_DATABASE_URL_VAR}");
            None
        }
    }
}

pub fn type_name(name: &str) -> DonutTypeName {
    DonutTypeName::new(name).expect("valid type name")
}

pub fn new_donut(name: &str, type_name: &str, price: i32) -> NewDonut {
    NewDonut::new(NewDonutDraft {
        name: name.to_owned(),
        type_name: type_name.to_owned(),
        description: format!("{name}, fresh this morning"),
        price,
        image: "https://images.example.com/donuts/test.jpg".to_owned(),
    })
    .expect("valid donut")
}

//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; the repository converts them into
//! domain types.

use diesel::prelude::*;

use super::schema::{donut_types, donuts};

/// Row read from `donut_types`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = donut_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DonutTypeRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = donut_types)]
pub(crate) struct NewDonutTypeRow<'a> {
    pub name: &'a str,
}

/// Row read from `donuts`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = donuts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DonutRow {
    pub id: i32,
    pub name: String,
    #[expect(dead_code, reason = "type is resolved through the joined donut_types row")]
    pub type_id: i32,
    pub description: String,
    pub price: i32,
    pub image: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = donuts)]
pub(crate) struct NewDonutRow<'a> {
    pub name: &'a str,
    pub type_id: i32,
    pub description: &'a str,
    pub price: i32,
    pub image: &'a str,
}

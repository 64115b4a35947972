//! Diesel table definitions for the donut catalogue.
//!
//! These must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Donut categories. `name` is unique.
    donut_types (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
    }
}

diesel::table! {
    /// Donut products. Rows cascade away with their type.
    donuts (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        type_id -> Int4,
        description -> Text,
        /// Price in cents, never negative.
        price -> Int4,
        #[max_length = 200]
        image -> Varchar,
    }
}

diesel::joinable!(donuts -> donut_types (type_id));

diesel::allow_tables_to_appear_in_same_query!(donut_types, donuts);

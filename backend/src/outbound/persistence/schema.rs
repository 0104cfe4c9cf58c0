//! Diesel table definitions for the course store.

diesel::table! {
    courses (id) {
        id -> Int8,
        #[max_length = 255]
        name -> Varchar,
    }
}

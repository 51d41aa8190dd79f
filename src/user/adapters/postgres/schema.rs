//! Diesel schema for user persistence.

diesel::table! {
    /// User records.
    users (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Email address.
        #[max_length = 255]
        email -> Varchar,
        /// Opaque credential stored as supplied.
        #[max_length = 255]
        password -> Varchar,
    }
}

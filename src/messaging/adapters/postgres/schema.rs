//! Diesel schema for message persistence.

diesel::table! {
    /// Posted messages.
    messages (id) {
        /// Caller-supplied message identifier.
        id -> Uuid,
        /// Author name.
        #[max_length = 255]
        author -> Varchar,
        /// Message text.
        body -> Text,
        /// Publication timestamp.
        published_at -> Timestamptz,
    }
}

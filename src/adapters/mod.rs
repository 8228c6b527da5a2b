//! Adapters - Implementations of port interfaces.
//!
//! - `content_fields` - In-memory content snapshot built from form payloads

mod content_fields;

pub use content_fields::ContentFields;

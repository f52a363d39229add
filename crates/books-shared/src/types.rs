//! Common types

use uuid::Uuid;

/// Opaque identifier used for books and session tokens.
pub type EntityId = String;

pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// True when `s` is a hyphenated UUID of version 4.
pub fn is_uuid_v4(s: &str) -> bool {
    match Uuid::try_parse(s) {
        Ok(id) => id.get_version_num() == 4 && id.hyphenated().to_string() == s.to_lowercase(),
        Err(_) => false,
    }
}

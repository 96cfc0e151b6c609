//! Two-way mapping between external hex identifiers and `ObjectId`.

use bson::oid::ObjectId;

use blog_core::RepoError;

/// Length of an `ObjectId` rendered as hex.
pub const HEX_ID_LEN: usize = 24;

/// Render a store identifier as 24 lowercase hex characters.
pub fn id_to_string(id: &ObjectId) -> String {
    id.to_hex()
}

/// Parse an external identifier. Fails without touching the store.
pub fn string_to_id(s: &str) -> Result<ObjectId, RepoError> {
    if s.len() != HEX_ID_LEN {
        return Err(RepoError::InvalidIdentifier(format!(
            "expected {} hex characters, got {} bytes",
            HEX_ID_LEN,
            s.len()
        )));
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RepoError::InvalidIdentifier(format!(
            "'{}' contains non-hex characters",
            s
        )));
    }

    ObjectId::parse_str(s).map_err(|e| RepoError::InvalidIdentifier(e.to_string()))
}

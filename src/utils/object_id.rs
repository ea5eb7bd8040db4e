//! Parsing of client-supplied store identifiers.

use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

/// Parses a path or payload segment as a store identifier.
///
/// A malformed identifier is a client error (400), not a store failure: the id
/// never reaches the store, so no document could ever match it.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::bad_request(format!("Invalid id '{raw}'")))
}

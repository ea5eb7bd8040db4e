//! Acknowledgment types reporting the outcome of write operations.
//!
//! Mutations return counts and identifiers rather than the documents
//! themselves, mirroring the document store's own write results.

use serde::Serialize;

/// Result of an insert: the store-assigned identifier of the new document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Result of an update. A zero `matched_count` means no document had the
/// given id; this is reported as success, not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of a delete. Deleting an absent document yields `deleted_count: 0`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acks_serialize_camel_case() {
        let insert = serde_json::to_value(InsertAck {
            acknowledged: true,
            inserted_id: "665f1f77bcf86cd799439011".to_string(),
        })
        .unwrap();
        assert_eq!(insert["insertedId"], "665f1f77bcf86cd799439011");

        let update = serde_json::to_value(UpdateAck {
            acknowledged: true,
            matched_count: 1,
            modified_count: 0,
        })
        .unwrap();
        assert_eq!(update["matchedCount"], 1);
        assert_eq!(update["modifiedCount"], 0);

        let delete = serde_json::to_value(DeleteAck {
            acknowledged: true,
            deleted_count: 1,
        })
        .unwrap();
        assert_eq!(delete["deletedCount"], 1);
    }
}

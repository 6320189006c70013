//! Create-or-replace JSON-LD documents in a head, by id.

use super::schema::{StructuredDataDocument, StructuredDataError};
use crate::head::{HeadTagSet, TagKey};

/// Prefix of the script id every structured data document is stored under.
pub const SCRIPT_ID_PREFIX: &str = "structured-data-";

/// Script id for the document owned by `id`.
pub fn script_id(id: &str) -> String {
    format!("{SCRIPT_ID_PREFIX}{id}")
}

/// Manages JSON-LD `<script>` elements in the head it borrows.
///
/// Callers pair one `upsert` on page enter with one `remove` using the same
/// id on page leave, so documents don't pile up across navigations.
pub struct StructuredDataSynchronizer<'a> {
    head: &'a mut HeadTagSet,
}

impl<'a> StructuredDataSynchronizer<'a> {
    pub fn new(head: &'a mut HeadTagSet) -> Self {
        Self { head }
    }

    /// Replace the document stored under `id`.
    ///
    /// On a serialization error the head is left unchanged.
    pub fn upsert(
        &mut self,
        document: &StructuredDataDocument,
        id: &str,
    ) -> Result<(), StructuredDataError> {
        let json = document.to_json_pretty()?;
        let id = script_id(id);
        self.head.remove_script(&id);
        self.head.upsert_script(&id, &json);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) {
        self.head.remove_script(&script_id(id));
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.head.get(&TagKey::Script(script_id(id)))
    }
}

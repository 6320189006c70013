//! Search engine and social metadata beyond plain head tags.
//!
//! - `og`: Open Graph / Twitter Card constants
//! - `schema`: JSON-LD documents and their builders
//! - `structured`: JSON-LD script synchronization

pub mod og;
pub mod schema;
mod structured;

pub use schema::{StructuredDataDocument, StructuredDataError};
pub use structured::{SCRIPT_ID_PREFIX, StructuredDataSynchronizer, script_id};

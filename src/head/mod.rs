//! Document head management.
//!
//! [`HeadTagSet`] holds the keyed head elements of one document;
//! [`TagSynchronizer`] writes page metadata into it.

mod sync;
mod tags;

pub use sync::TagSynchronizer;
pub use tags::{HeadTag, HeadTagSet, MetaAttr, TagKey};

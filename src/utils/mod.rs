//! Utility modules shared across the toolkit.

pub mod date;
pub mod html;
pub mod mime;
pub mod plural;

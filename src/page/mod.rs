//! Page types: metadata and routing.

mod meta;
mod route;

pub use meta::{PageMetadata, PageType};
pub use route::{Route, STATIC_ROUTES, StaticRoute, USERS_PATH};

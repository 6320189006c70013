//! Open Graph and Twitter Card constants.

/// Recommended `og:image` dimensions for large link previews.
pub const OG_IMAGE_WIDTH: &str = "1200";
pub const OG_IMAGE_HEIGHT: &str = "630";

pub const TWITTER_CARD: &str = "summary_large_image";

/// `robots` values for indexable and suppressed pages.
pub const ROBOTS_INDEX: &str = "index,follow";
pub const ROBOTS_NOINDEX: &str = "noindex,nofollow";

/// Prefixes of every property-keyed tag the synchronizer manages.
pub const MANAGED_PROPERTY_PREFIXES: [&str; 2] = ["og:", "article:"];

/// Prefixes of every name-keyed tag the synchronizer manages.
pub const MANAGED_NAME_PREFIXES: [&str; 1] = ["twitter:"];

/// Exact names of managed name-keyed tags.
pub const MANAGED_NAMES: [&str; 4] = ["description", "keywords", "author", "robots"];

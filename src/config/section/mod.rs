//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seokit.toml`:
//!
//! | Module  | TOML Section | Purpose                                   |
//! |---------|--------------|-------------------------------------------|
//! | `site`  | `[site]`     | Base URL, site name, default image/locale |
//! | `seo`   | `[seo]`      | Sitemap and robots policy                 |
//! | `serve` | `[serve]`    | HTTP server                               |

mod seo;
mod serve;
mod site;

pub use seo::{RobotsConfig, SeoConfig, SitemapConfig};
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;

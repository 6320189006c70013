//! seokit - server-side rendered SEO metadata, sitemap and robots for a demo site.
//!
//! | Module      | Role                                          |
//! |-------------|-----------------------------------------------|
//! | `resolve`   | Per-page `PageMetadata` and JSON-LD documents |
//! | `head`      | Keyed head elements and the tag synchronizer  |
//! | `seo`       | JSON-LD schema types and their synchronizer   |
//! | `navigator` | Page activation over one document head        |
//! | `generator` | `sitemap.xml` and `robots.txt`                |
//! | `cli`       | Commands and the HTTP server                  |

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod head;
pub mod logger;
pub mod navigator;
pub mod page;
pub mod render;
pub mod resolve;
pub mod seo;
pub mod store;
pub mod utils;

//! Page routes of the demo site.

use crate::core::{UrlPath, encode_segment};
use crate::generator::sitemap::ChangeFreq;

/// Path of the user directory.
pub const USERS_PATH: &str = "users";

/// A routed page.
///
/// `UserDetail` keeps the raw route parameter; parsing it into an id is the
/// resolver's job so malformed ids surface as resolver errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    UserList,
    UserDetail(String),
    About,
    NotFound(UrlPath),
}

/// Sitemap hints for a statically known route.
#[derive(Debug, Clone, Copy)]
pub struct StaticRoute {
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Every route known without consulting the entity store.
pub const STATIC_ROUTES: [StaticRoute; 3] = [
    StaticRoute {
        path: "",
        changefreq: ChangeFreq::Daily,
        priority: 1.0,
    },
    StaticRoute {
        path: USERS_PATH,
        changefreq: ChangeFreq::Daily,
        priority: 0.9,
    },
    StaticRoute {
        path: "about",
        changefreq: ChangeFreq::Monthly,
        priority: 0.7,
    },
];

impl Route {
    /// Route a browser URL.
    pub fn parse(url: &str) -> Self {
        let path = UrlPath::from_browser(url);
        let segments: Vec<&str> = path.segments().collect();

        match segments.as_slice() {
            [] => Self::Home,
            [USERS_PATH] => Self::UserList,
            [USERS_PATH, param] => Self::UserDetail((*param).to_string()),
            ["about"] => Self::About,
            _ => Self::NotFound(path),
        }
    }

    /// Site-relative path of the route, percent-encoded, without leading slash.
    pub fn path(&self) -> String {
        match self {
            Self::Home => String::new(),
            Self::UserList => USERS_PATH.to_string(),
            Self::UserDetail(param) => format!("{USERS_PATH}/{}", encode_segment(param)),
            Self::About => "about".to_string(),
            Self::NotFound(path) => path.to_encoded(),
        }
    }

    /// Id of the JSON-LD document a page owns while active.
    pub const fn structured_data_id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::UserList => "user-list",
            Self::UserDetail(_) => "user-profile",
            Self::About => "about",
            Self::NotFound(_) => "not-found",
        }
    }
}

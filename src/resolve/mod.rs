//! Per-route metadata resolution.
//!
//! [`resolve`] turns a [`Route`] into everything a page needs before it
//! renders: its [`PageMetadata`], the data its body shows and its JSON-LD
//! document. Resolvers never touch the head.

mod documents;
pub mod pages;

pub use documents::page_document;

use thiserror::Error;

use crate::config::SiteConfig;
use crate::page::{PageMetadata, Route};
use crate::seo::StructuredDataDocument;
use crate::store::{EntityStore, StoreError, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("user {id} not found")]
    EntityNotFound { id: u64 },

    #[error("invalid user id '{raw}'")]
    InvalidRouteParameter { raw: String },
}

impl ResolveError {
    /// Both variants route the visitor to the not-found page.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EntityNotFound { .. } | Self::InvalidRouteParameter { .. }
        )
    }
}

impl From<StoreError> for ResolveError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::EntityNotFound { id },
        }
    }
}

/// Data a page body renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    Home,
    UserList(Vec<User>),
    UserDetail(User),
    About,
    NotFound,
}

/// Result of resolving one route.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub metadata: PageMetadata,
    pub content: PageContent,
    pub document: Option<StructuredDataDocument>,
}

impl Resolved {
    fn new(metadata: PageMetadata, content: PageContent, config: &SiteConfig) -> Self {
        let document = page_document(&content, config);
        Self {
            metadata,
            content,
            document,
        }
    }

    /// Generic not-found page for `path`.
    pub fn not_found(config: &SiteConfig, path: &str) -> Self {
        Self::new(pages::not_found(config, path), PageContent::NotFound, config)
    }

    pub fn is_not_found(&self) -> bool {
        self.content == PageContent::NotFound
    }
}

/// Parse a user route parameter into an id.
///
/// Only the canonical decimal form is accepted: ASCII digits without sign or
/// leading zeros, so each profile has exactly one URL.
pub fn parse_user_id(raw: &str) -> Result<u64, ResolveError> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));

    canonical
        .then(|| raw.parse().ok())
        .flatten()
        .ok_or_else(|| ResolveError::InvalidRouteParameter {
            raw: raw.to_string(),
        })
}

/// Resolve `route`, awaiting the store for pages that need entities.
///
/// Unknown routes resolve to the not-found page; a bad or unknown user id
/// is an error the caller recovers from.
pub async fn resolve<S: EntityStore>(
    route: &Route,
    config: &SiteConfig,
    store: &S,
) -> Result<Resolved, ResolveError> {
    let resolved = match route {
        Route::Home => Resolved::new(pages::home(config), PageContent::Home, config),
        Route::UserList => {
            let users = store.list().await;
            let metadata = pages::user_list(config, users.len());
            Resolved::new(metadata, PageContent::UserList(users), config)
        }
        Route::UserDetail(raw) => {
            let id = parse_user_id(raw)?;
            let user = store.get_by_id(id).await?;
            let metadata = pages::user_detail(config, &user);
            Resolved::new(metadata, PageContent::UserDetail(user), config)
        }
        Route::About => Resolved::new(pages::about(config), PageContent::About, config),
        Route::NotFound(_) => Resolved::not_found(config, &route.path()),
    };
    Ok(resolved)
}

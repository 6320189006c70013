//! Page activation protocol.
//!
//! A [`Navigator`] owns one document head and moves it from page to page:
//!
//! 1. leave the previous page (drop its JSON-LD document)
//! 2. take a ticket for this navigation
//! 3. resolve the route, awaiting any entity lookup
//! 4. discard the result if the ticket was superseded meanwhile
//! 5. apply the metadata, or not-found metadata when resolution failed
//!
//! Superseding happens when another navigation starts or when
//! [`NavigationControl::abandon`] is called, e.g. because the visitor left
//! before the lookup finished. Abandoned results never touch the head.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::SiteConfig;
use crate::head::{HeadTagSet, TagSynchronizer};
use crate::page::Route;
use crate::resolve::{self, PageContent, Resolved};
use crate::seo::StructuredDataSynchronizer;
use crate::store::EntityStore;
use crate::{debug, log};

/// How a navigation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Metadata applied; the page body renders `PageContent`.
    Rendered(PageContent),
    /// Not-found metadata applied.
    NotFound,
    /// Superseded before resolution finished; head untouched.
    Abandoned,
}

/// Snapshot of the navigation generation at the start of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavigationTicket(u64);

/// Cloneable handle that cancels whatever navigation is in flight.
#[derive(Debug, Clone)]
pub struct NavigationControl {
    generation: Arc<AtomicU64>,
}

impl NavigationControl {
    pub fn abandon(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    head: HeadTagSet,
    generation: Arc<AtomicU64>,
    /// JSON-LD id of the active page.
    active: Option<&'static str>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head(&self) -> &HeadTagSet {
        &self.head
    }

    pub fn control(&self) -> NavigationControl {
        NavigationControl {
            generation: Arc::clone(&self.generation),
        }
    }

    /// Leave the active page, invalidating any pending navigation.
    pub fn leave(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(id) = self.active.take() {
            StructuredDataSynchronizer::new(&mut self.head).remove(id);
        }
    }

    fn ticket(&self) -> NavigationTicket {
        NavigationTicket(self.generation.load(Ordering::SeqCst))
    }

    fn is_current(&self, ticket: NavigationTicket) -> bool {
        self.ticket() == ticket
    }

    /// Activate `route`.
    pub async fn navigate<S: EntityStore>(
        &mut self,
        route: &Route,
        config: &SiteConfig,
        store: &S,
    ) -> Outcome {
        self.leave();
        let ticket = self.ticket();

        let result = resolve::resolve(route, config, store).await;

        if !self.is_current(ticket) {
            debug!("nav"; "abandoned /{}", route.path());
            return Outcome::Abandoned;
        }

        let resolved = result.unwrap_or_else(|err| {
            debug!("nav"; "{err}, showing not found for /{}", route.path());
            Resolved::not_found(config, &route.path())
        });

        let id = route.structured_data_id();
        self.apply(&resolved, id);

        if resolved.is_not_found() {
            Outcome::NotFound
        } else {
            Outcome::Rendered(resolved.content)
        }
    }

    fn apply(&mut self, resolved: &Resolved, id: &'static str) {
        TagSynchronizer::new(&mut self.head).apply_page_metadata(&resolved.metadata);

        let Some(document) = &resolved.document else {
            return;
        };
        match StructuredDataSynchronizer::new(&mut self.head).upsert(document, id) {
            Ok(()) => self.active = Some(id),
            Err(err) => log!("error"; "structured data for {id}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::head::TagKey;
    use crate::store::{MockUserStore, StoreError, User};
    use std::time::Duration;

    /// Abandons the navigation while the lookup is in flight.
    struct AbandoningStore {
        inner: MockUserStore,
        control: NavigationControl,
    }

    impl EntityStore for AbandoningStore {
        async fn get_by_id(&self, id: u64) -> Result<User, StoreError> {
            self.control.abandon();
            self.inner.get_by_id(id).await
        }

        async fn list(&self) -> Vec<User> {
            self.control.abandon();
            self.inner.list().await
        }
    }

    fn scripts(head: &HeadTagSet) -> Vec<String> {
        head.iter()
            .filter_map(|t| match &t.key {
                TagKey::Script(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_navigate_home() {
        let config = test_parse_config("");
        let mut nav = Navigator::new();
        let outcome = nav
            .navigate(&Route::Home, &config, &MockUserStore::default())
            .await;

        assert_eq!(outcome, Outcome::Rendered(PageContent::Home));
        assert!(nav.head().title().unwrap().starts_with("Test Site"));
        assert_eq!(scripts(nav.head()), ["structured-data-home"]);
    }

    #[tokio::test]
    async fn test_navigate_detail() {
        let config = test_parse_config("");
        let store = MockUserStore::default();
        let mut nav = Navigator::new();
        let outcome = nav.navigate(&Route::parse("/users/1"), &config, &store).await;

        assert!(matches!(outcome, Outcome::Rendered(PageContent::UserDetail(_))));
        let head = nav.head();
        assert!(head.title().unwrap().contains("Alice Johnson"));
        assert_eq!(
            head.get(&TagKey::name("description")),
            store.users()[0].bio.as_deref()
        );
        assert_eq!(head.get(&TagKey::property("og:type")), Some("profile"));
    }

    #[tokio::test]
    async fn test_navigate_missing_user() {
        let config = test_parse_config("");
        let mut nav = Navigator::new();
        let outcome = nav
            .navigate(&Route::parse("/users/9999"), &config, &MockUserStore::default())
            .await;

        assert_eq!(outcome, Outcome::NotFound);
        let head = nav.head();
        assert_eq!(head.title(), Some("Page Not Found - Test Site"));
        assert_eq!(head.get(&TagKey::name("robots")), Some("noindex,nofollow"));
        assert_eq!(
            head.get(&TagKey::link("canonical")),
            Some("https://example.com/users/9999")
        );
        assert_eq!(head.get(&TagKey::property("og:site_name")), Some("Test Site"));
        assert!(scripts(head).is_empty());
    }

    #[tokio::test]
    async fn test_not_found_url_stays_encoded() {
        let config = test_parse_config("");
        let store = MockUserStore::default();
        let mut nav = Navigator::new();

        let outcome = nav.navigate(&Route::parse("/a%20b%0Ac"), &config, &store).await;
        assert_eq!(outcome, Outcome::NotFound);
        let expected = Some("https://example.com/a%20b%0Ac");
        assert_eq!(nav.head().get(&TagKey::link("canonical")), expected);
        assert_eq!(nav.head().get(&TagKey::property("og:url")), expected);

        nav.navigate(&Route::parse("/users/caf%C3%A9%0A"), &config, &store).await;
        assert_eq!(
            nav.head().get(&TagKey::link("canonical")),
            Some("https://example.com/users/caf%C3%A9%0A")
        );
        assert!(nav.head().iter().all(|tag| !tag.value.contains('\n')));
    }

    #[tokio::test]
    async fn test_navigation_replaces_page_documents() {
        let config = test_parse_config("");
        let store = MockUserStore::default();
        let mut nav = Navigator::new();

        nav.navigate(&Route::Home, &config, &store).await;
        nav.navigate(&Route::About, &config, &store).await;
        assert_eq!(scripts(nav.head()), ["structured-data-about"]);

        nav.navigate(&Route::parse("/missing"), &config, &store).await;
        assert!(scripts(nav.head()).is_empty());
    }

    #[tokio::test]
    async fn test_abandoned_lookup_leaves_head_untouched() {
        let config = test_parse_config("");
        let mut nav = Navigator::new();
        nav.navigate(&Route::Home, &config, &MockUserStore::default())
            .await;

        let store = AbandoningStore {
            inner: MockUserStore::default(),
            control: nav.control(),
        };
        let outcome = nav.navigate(&Route::parse("/users/1"), &config, &store).await;

        assert_eq!(outcome, Outcome::Abandoned);
        let head = nav.head();
        assert!(head.title().unwrap().starts_with("Test Site"));
        assert_eq!(head.get(&TagKey::property("og:type")), Some("website"));
        assert!(scripts(head).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandon_during_slow_lookup() {
        let config = test_parse_config("");
        let store = MockUserStore::default().with_latency(Duration::from_millis(200));
        let mut nav = Navigator::new();
        let control = nav.control();
        let route = Route::parse("/users/2");

        let (outcome, ()) = tokio::join!(
            nav.navigate(&route, &config, &store),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                control.abandon();
            }
        );

        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(nav.head().title(), None);
        assert!(nav.head().is_empty());
    }

    #[tokio::test]
    async fn test_leave_removes_document() {
        let config = test_parse_config("");
        let mut nav = Navigator::new();
        nav.navigate(&Route::UserList, &config, &MockUserStore::default())
            .await;
        assert_eq!(scripts(nav.head()), ["structured-data-user-list"]);

        nav.leave();
        assert!(scripts(nav.head()).is_empty());
        assert!(nav.head().title().is_some());
    }
}

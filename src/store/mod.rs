//! Entity lookup collaborators.
//!
//! Resolvers only see the [`EntityStore`] trait; the server wires in the
//! in-memory [`MockUserStore`].

mod mock;
mod user;

pub use mock::MockUserStore;
pub use user::User;

use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no user with id {0}")]
    NotFound(u64),
}

/// Asynchronous, single-value entity lookup.
pub trait EntityStore: Send + Sync {
    /// Look up one user. Fails with [`StoreError::NotFound`] on a miss.
    fn get_by_id(&self, id: u64) -> impl Future<Output = Result<User, StoreError>> + Send;

    /// All users, ordered by id.
    fn list(&self) -> impl Future<Output = Vec<User>> + Send;
}

//! Storage abstraction for RSVP responses.
//!
//! # Implementations
//!
//! - `PostgresRsvpRepository` (in `wedding-rsvp-postgres`): production store
//! - `InMemoryRsvpRepository` (in `wedding-rsvp-testing`): fast, deterministic tests
//! - `FailingRsvpRepository` (in `wedding-rsvp-testing`): every call fails
//!
//! There is no update or delete: a response is written once per
//! form submission and only ever read afterwards.

use crate::error::Result;
use crate::rsvp::{NewRsvp, RsvpResponse};
use crate::stats::AttendanceStats;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by repository methods.
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Append-only store of RSVP responses.
///
/// # Dyn Compatibility
///
/// Methods return [`RepositoryFuture`] instead of using `async fn` so the HTTP
/// state can hold an `Arc<dyn RsvpRepository>` and swap stores in tests.
pub trait RsvpRepository: Send + Sync {
    /// Insert one response and return the stored row.
    ///
    /// `created_at` is assigned by the caller from its clock.
    ///
    /// # Errors
    ///
    /// - `Storage`: the insert failed; nothing was written
    fn insert(&self, rsvp: NewRsvp, created_at: DateTime<Utc>) -> RepositoryFuture<'_, RsvpResponse>;

    /// All responses, most recent first.
    ///
    /// Rows sharing a `created_at` are ordered by `id`, highest first.
    ///
    /// # Errors
    ///
    /// - `Storage`: the read failed
    fn list(&self) -> RepositoryFuture<'_, Vec<RsvpResponse>>;

    /// Aggregate counts over every stored response.
    ///
    /// # Errors
    ///
    /// - `Storage`: the read failed
    fn stats(&self) -> RepositoryFuture<'_, AttendanceStats>;

    /// Cheap round trip used by the readiness probe.
    ///
    /// # Errors
    ///
    /// - `Storage`: the store is unreachable
    fn ping(&self) -> RepositoryFuture<'_, ()>;
}

//! In-memory RSVP stores for testing
//!
//! - [`InMemoryRsvpRepository`]: `Vec`-backed store with sequential ids
//! - [`FailingRsvpRepository`]: every call returns a storage error

use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};
use wedding_rsvp_core::repository::{RepositoryFuture, RsvpRepository};
use wedding_rsvp_core::{AttendanceStats, NewRsvp, RsvpError, RsvpResponse};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<RsvpResponse>,
    last_id: i32,
}

/// In-memory RSVP store for fast, deterministic testing.
///
/// Ids start at 1 and increase by one per insert, like a `SERIAL` column.
/// Clones share the same rows.
///
/// # Example
///
/// ```
/// use wedding_rsvp_testing::{InMemoryRsvpRepository, helpers, test_clock};
/// use wedding_rsvp_core::environment::Clock;
/// use wedding_rsvp_core::RsvpRepository;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = InMemoryRsvpRepository::new();
/// repo.insert(helpers::declining("Bob").normalize()?, test_clock().now()).await?;
///
/// assert_eq!(repo.len(), 1);
/// assert_eq!(repo.list().await?[0].guest_count, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryRsvpRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRsvpRepository {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored responses
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().map_or(0, |table| table.rows.len())
    }

    /// Check if nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn newest_first(&self) -> Result<Vec<RsvpResponse>, RsvpError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

fn poisoned() -> RsvpError {
    RsvpError::Storage("in-memory table lock poisoned".to_string())
}

impl RsvpRepository for InMemoryRsvpRepository {
    fn insert(&self, rsvp: NewRsvp, created_at: DateTime<Utc>) -> RepositoryFuture<'_, RsvpResponse> {
        Box::pin(async move {
            let mut table = self.table.write().map_err(|_| poisoned())?;
            table.last_id += 1;
            let row = RsvpResponse::record(table.last_id, rsvp, created_at);
            table.rows.push(row.clone());
            Ok(row)
        })
    }

    fn list(&self) -> RepositoryFuture<'_, Vec<RsvpResponse>> {
        Box::pin(async move { self.newest_first() })
    }

    fn stats(&self) -> RepositoryFuture<'_, AttendanceStats> {
        Box::pin(async move {
            let table = self.table.read().map_err(|_| poisoned())?;
            Ok(AttendanceStats::tally(&table.rows))
        })
    }

    fn ping(&self) -> RepositoryFuture<'_, ()> {
        Box::pin(async move { Ok(()) })
    }
}

/// Store whose every operation fails with [`RsvpError::Storage`].
///
/// Used to exercise the 500 paths of the HTTP layer.
#[derive(Clone, Debug)]
pub struct FailingRsvpRepository {
    reason: String,
}

impl FailingRsvpRepository {
    /// Fail with a generic "database unavailable" reason
    #[must_use]
    pub fn new() -> Self {
        Self::with_reason("database unavailable")
    }

    /// Fail with the given reason
    #[must_use]
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T: Send + 'static>(&self) -> RepositoryFuture<'_, T> {
        let err = RsvpError::Storage(self.reason.clone());
        Box::pin(async move { Err(err) })
    }
}

impl Default for FailingRsvpRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RsvpRepository for FailingRsvpRepository {
    fn insert(&self, _rsvp: NewRsvp, _created_at: DateTime<Utc>) -> RepositoryFuture<'_, RsvpResponse> {
        self.fail()
    }

    fn list(&self) -> RepositoryFuture<'_, Vec<RsvpResponse>> {
        self.fail()
    }

    fn stats(&self) -> RepositoryFuture<'_, AttendanceStats> {
        self.fail()
    }

    fn ping(&self) -> RepositoryFuture<'_, ()> {
        self.fail()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use crate::helpers::{attending, declining};
    use crate::mocks::{FixedClock, SteppingClock, test_clock};
    use chrono::TimeDelta;
    use wedding_rsvp_core::environment::Clock;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryRsvpRepository::new();
        let now = test_clock().now();

        let first = repo.insert(attending("Alice", 2).normalize().unwrap(), now).await.unwrap();
        let second = repo.insert(declining("Bob").normalize().unwrap(), now).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryRsvpRepository::new();
        let clock = SteppingClock::new(test_clock().now(), TimeDelta::seconds(1));

        for name in ["Alice", "Bob", "Carol"] {
            repo.insert(attending(name, 1).normalize().unwrap(), clock.now())
                .await
                .unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Carol", "Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_same_timestamp_orders_by_id() {
        let repo = InMemoryRsvpRepository::new();
        let clock = FixedClock::new(test_clock().now());

        repo.insert(attending("Alice", 1).normalize().unwrap(), clock.now()).await.unwrap();
        repo.insert(attending("Bob", 1).normalize().unwrap(), clock.now()).await.unwrap();

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[tokio::test]
    async fn test_stats_over_stored_rows() {
        let repo = InMemoryRsvpRepository::new();
        let now = test_clock().now();

        assert_eq!(repo.stats().await.unwrap(), AttendanceStats::default());

        repo.insert(attending("Alice", 3).normalize().unwrap(), now).await.unwrap();
        repo.insert(declining("Bob").normalize().unwrap(), now).await.unwrap();

        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.total_responses, 2);
        assert_eq!(stats.attending_count, 1);
        assert_eq!(stats.total_guests, 3);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let repo = InMemoryRsvpRepository::new();
        let clone = repo.clone();

        clone
            .insert(declining("Bob").normalize().unwrap(), test_clock().now())
            .await
            .unwrap();

        assert!(!repo.is_empty());
    }

    #[tokio::test]
    async fn test_failing_repository_fails_everything() {
        let repo = FailingRsvpRepository::with_reason("boom");

        let err = repo
            .insert(declining("Bob").normalize().unwrap(), test_clock().now())
            .await
            .unwrap_err();
        assert_eq!(err, RsvpError::Storage("boom".to_string()));
        assert!(repo.list().await.is_err());
        assert!(repo.stats().await.is_err());
        assert!(repo.ping().await.is_err());
    }
}

//! `rsvp_responses` table access.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use wedding_rsvp_core::repository::{RepositoryFuture, RsvpRepository};
use wedding_rsvp_core::{AttendanceStats, NewRsvp, RsvpError, RsvpResponse};

const RETURNED_COLUMNS: &str =
    "id, name, email, attending, guest_count, dietary_restrictions, message, created_at";

/// Row as read from `rsvp_responses`.
///
/// The two free-text columns are read as nullable so rows written before the
/// `NOT NULL DEFAULT ''` constraint still load.
#[derive(Debug, sqlx::FromRow)]
struct RsvpRow {
    id: i32,
    name: String,
    email: String,
    attending: bool,
    guest_count: i32,
    dietary_restrictions: Option<String>,
    message: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<RsvpRow> for RsvpResponse {
    fn from(row: RsvpRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            attending: row.attending,
            guest_count: row.guest_count,
            dietary_restrictions: row.dietary_restrictions.unwrap_or_default(),
            message: row.message.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

/// `PostgreSQL`-backed RSVP store.
///
/// Every operation is a single statement on the pool; there are no
/// transactions and no retries.
#[derive(Debug, Clone)]
pub struct PostgresRsvpRepository {
    pool: PgPool,
}

impl PostgresRsvpRepository {
    /// Use an existing pool (shared with other components or configured by
    /// the caller).
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    #[tracing::instrument(skip(self, rsvp), fields(attending = rsvp.attending(), guest_count = rsvp.guest_count()))]
    async fn insert_row(
        &self,
        rsvp: NewRsvp,
        created_at: DateTime<Utc>,
    ) -> Result<RsvpResponse, RsvpError> {
        let row: RsvpRow = sqlx::query_as(&format!(
            r"
            INSERT INTO rsvp_responses (
                name, email, attending, guest_count, dietary_restrictions, message, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {RETURNED_COLUMNS}
            "
        ))
        .bind(rsvp.name())
        .bind(rsvp.email())
        .bind(rsvp.attending())
        .bind(rsvp.guest_count())
        .bind(rsvp.dietary_restrictions())
        .bind(rsvp.message())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;

        tracing::debug!(rsvp_id = row.id, "RSVP row inserted");
        Ok(row.into())
    }

    #[tracing::instrument(skip(self))]
    async fn list_rows(&self) -> Result<Vec<RsvpResponse>, RsvpError> {
        let rows: Vec<RsvpRow> = sqlx::query_as(&format!(
            "SELECT {RETURNED_COLUMNS} FROM rsvp_responses ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        tracing::debug!(count = rows.len(), "RSVP rows loaded");
        Ok(rows.into_iter().map(RsvpResponse::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn aggregate(&self) -> Result<AttendanceStats, RsvpError> {
        let (total_responses, attending_count, total_guests): (i64, i64, i64) = sqlx::query_as(
            r"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE attending),
                COALESCE(SUM(guest_count) FILTER (WHERE attending), 0)::BIGINT
            FROM rsvp_responses
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;

        Ok(AttendanceStats {
            total_responses,
            attending_count,
            total_guests,
        })
    }

    async fn select_one(&self) -> Result<(), RsvpError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(storage)
    }
}

#[allow(clippy::needless_pass_by_value)] // used as a map_err callback
fn storage(err: sqlx::Error) -> RsvpError {
    RsvpError::Storage(err.to_string())
}

impl RsvpRepository for PostgresRsvpRepository {
    fn insert(&self, rsvp: NewRsvp, created_at: DateTime<Utc>) -> RepositoryFuture<'_, RsvpResponse> {
        Box::pin(self.insert_row(rsvp, created_at))
    }

    fn list(&self) -> RepositoryFuture<'_, Vec<RsvpResponse>> {
        Box::pin(self.list_rows())
    }

    fn stats(&self) -> RepositoryFuture<'_, AttendanceStats> {
        Box::pin(self.aggregate())
    }

    fn ping(&self) -> RepositoryFuture<'_, ()> {
        Box::pin(self.select_one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_text_columns_become_empty() {
        let row = RsvpRow {
            id: 7,
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            attending: false,
            guest_count: 0,
            dietary_restrictions: None,
            message: None,
            created_at: Utc::now(),
        };

        let response = RsvpResponse::from(row);
        assert_eq!(response.id, 7);
        assert_eq!(response.dietary_restrictions, "");
        assert_eq!(response.message, "");
    }
}

//! `PostgreSQL` storage for the wedding RSVP service.
//!
//! Implements [`RsvpRepository`](wedding_rsvp_core::RsvpRepository) on top of
//! an sqlx [`PgPool`](sqlx::PgPool). The `rsvp_responses` table is expected to
//! exist already:
//!
//! ```sql
//! CREATE TABLE rsvp_responses (
//!     id SERIAL PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     email TEXT NOT NULL,
//!     attending BOOLEAN NOT NULL,
//!     guest_count INTEGER NOT NULL,
//!     dietary_restrictions TEXT NOT NULL DEFAULT '',
//!     message TEXT NOT NULL DEFAULT '',
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```
//!
//! # Example
//!
//! ```no_run
//! use wedding_rsvp_postgres::PostgresRsvpRepository;
//! use wedding_rsvp_core::RsvpRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = sqlx::PgPool::connect("postgres://localhost/wedding").await?;
//! let repo = PostgresRsvpRepository::from_pool(pool);
//! let stats = repo.stats().await?;
//! println!("{} guests so far", stats.total_guests);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod rsvp;

pub use rsvp::PostgresRsvpRepository;

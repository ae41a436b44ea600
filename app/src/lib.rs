//! # Wedding RSVP
//!
//! A wedding invitation site: a landing page with an RSVP form, a JSON API
//! that stores responses in `PostgreSQL`, and an admin page listing them.
//!
//! - [`config`]: environment configuration
//! - [`server`]: state, router and probes
//! - [`api`]: RSVP, event and calendar handlers
//! - [`pages`]: the two HTML pages
//! - [`metrics`]: Prometheus counters

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod metrics;
pub mod pages;
pub mod server;

//! Full-stack integration tests driving the router against a real Postgres.
//!
//! Requires a running PostgreSQL instance; configure it through
//! `config/test.toml` or `HAVEN__DATABASE__URL`. Each test seeds its own
//! users and asserts only on rows it created, so the suite can run in
//! parallel against a shared database.

mod helpers;

mod inspection_test;
mod listing_test;
mod notification_test;
mod session_test;

//! CRUD checks for the `subscriber` table of `subscriber_db`.
//!
//! The live scenarios are in `tests/`; they need a reachable MySQL server and
//! are run with `cargo test -- --ignored`.

pub mod config;
pub mod fixture;
pub mod models;
pub mod store;

pub use config::DbConfig;
pub use fixture::{Fixture, init_tracing};
pub use models::email::Subscriber;

//! # barberhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `barberhub-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `barberhub-app` (for the port trait) and `barberhub-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod barbershop_repo;
pub mod error;
pub mod pool;

pub use barbershop_repo::SqliteBarbershopRepository;
pub use error::StorageError;
pub use pool::{Config, Database};

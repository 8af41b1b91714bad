//! # barberhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement:
//!   - `BarbershopRepository` — insert-and-return-id, find-with-filter-and-limit
//! - Define the **driving port** as a use-case struct:
//!   - `DirectoryService` — create, list/search/sort, seed
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `barberhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

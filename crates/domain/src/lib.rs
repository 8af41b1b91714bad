//! # barberhub-domain
//!
//! Pure domain model for the BarberHub directory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Barbershop** records and their construction defaults
//! - Define **Coordinates** and great-circle distance computation
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod barbershop;
pub mod error;
pub mod geo;
pub mod id;

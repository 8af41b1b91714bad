//! JSON REST API handlers.

pub mod barbershops;
pub mod meta;

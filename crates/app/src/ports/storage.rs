//! Storage port — the repository trait for persistence.
//!
//! The contract mirrors what the document store exposes to the application:
//! insert one record into the collection and return its generated
//! identifier, or find records matching a filter up to a limit. No
//! transaction semantics or retry policy is defined at this boundary.

use std::future::Future;

use barberhub_domain::barbershop::{Barbershop, StoredBarbershop};
use barberhub_domain::error::BarberHubError;
use barberhub_domain::id::BarbershopId;

/// Filter for [`BarbershopRepository::find`].
#[derive(Debug, Clone, Default)]
pub struct ShopFilter {
    /// Case-insensitive substring match on the record name.
    pub name_contains: Option<String>,
}

/// Persistence port for barbershop records.
pub trait BarbershopRepository {
    /// Insert a record and return the storage-assigned identifier.
    fn insert(
        &self,
        record: Barbershop,
    ) -> impl Future<Output = Result<BarbershopId, BarberHubError>> + Send;

    /// Find up to `limit` records matching `filter`, in the store's
    /// default ordering.
    fn find(
        &self,
        filter: ShopFilter,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<StoredBarbershop>, BarberHubError>> + Send;

    /// Cheap reachability probe, used only by the diagnostic endpoint.
    fn ping(&self) -> impl Future<Output = Result<(), BarberHubError>> + Send;
}

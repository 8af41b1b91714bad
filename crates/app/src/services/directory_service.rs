//! Directory service — use-cases for the barbershop directory.

use serde::Serialize;

use barberhub_domain::barbershop::{Barbershop, StoredBarbershop};
use barberhub_domain::error::{BarberHubError, ValidationError};
use barberhub_domain::geo::Coordinates;
use barberhub_domain::id::BarbershopId;

use crate::ports::{BarbershopRepository, ShopFilter};

/// Number of records returned by a list when no limit is given.
pub const DEFAULT_LIMIT: u32 = 20;

/// Upper bound for the list limit.
pub const MAX_LIMIT: u32 = 100;

/// Parameters for [`DirectoryService::list_barbershops`].
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Case-insensitive substring filter on the record name.
    pub name_contains: Option<String>,
    /// Origin for proximity annotation and sorting. Requires both
    /// coordinates; callers with only one drop it entirely.
    pub near: Option<Coordinates>,
    /// Hard cap on fetched records, `[1, MAX_LIMIT]`.
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            name_contains: None,
            near: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A list entry: the persisted fields re-keyed under a plain string `id`,
/// optionally annotated with the distance from the query origin.
#[derive(Debug, Clone, Serialize)]
pub struct ListedBarbershop {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub rating: f64,
    pub reviews: i64,
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl ListedBarbershop {
    fn from_stored(stored: StoredBarbershop) -> Self {
        Self {
            id: stored.id.to_string(),
            name: stored.record.name,
            address: stored.record.address,
            lat: stored.record.coordinates.lat,
            lng: stored.record.coordinates.lng,
            rating: stored.record.rating,
            reviews: stored.record.reviews,
            phone: stored.record.phone,
            distance_km: None,
        }
    }
}

struct SeedSample {
    name: &'static str,
    address: &'static str,
    dlat: f64,
    dlng: f64,
    rating: f64,
    reviews: i64,
}

/// The six fixed samples, inserted at small offsets from the seed origin.
const SEED_SAMPLES: [SeedSample; 6] = [
    SeedSample {
        name: "Fade Masters",
        address: "123 Main St",
        dlat: 0.002,
        dlng: 0.001,
        rating: 4.8,
        reviews: 210,
    },
    SeedSample {
        name: "Sharp Cuts",
        address: "45 Oak Ave",
        dlat: -0.0015,
        dlng: 0.0025,
        rating: 4.6,
        reviews: 150,
    },
    SeedSample {
        name: "Clip & Sip",
        address: "77 Pine Rd",
        dlat: 0.001,
        dlng: -0.002,
        rating: 4.7,
        reviews: 98,
    },
    SeedSample {
        name: "Urban Barber Co.",
        address: "19 Market St",
        dlat: -0.002,
        dlng: -0.001,
        rating: 4.9,
        reviews: 320,
    },
    SeedSample {
        name: "The Gentleman's Den",
        address: "5 River Lane",
        dlat: 0.0005,
        dlng: 0.0015,
        rating: 4.5,
        reviews: 75,
    },
    SeedSample {
        name: "Blade & Brush",
        address: "88 Sunset Blvd",
        dlat: -0.001,
        dlng: -0.002,
        rating: 4.4,
        reviews: 64,
    },
];

/// Application service for the barbershop directory.
pub struct DirectoryService<R> {
    repo: R,
}

impl<R: BarbershopRepository> DirectoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new barbershop after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BarberHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, record), fields(shop_name = %record.name))]
    pub async fn create_barbershop(
        &self,
        record: Barbershop,
    ) -> Result<BarbershopId, BarberHubError> {
        record.validate()?;
        self.repo.insert(record).await
    }

    /// List records, optionally filtered by name and sorted by proximity.
    ///
    /// The limit caps the storage fetch *before* any distance work, so a
    /// proximity query only reorders whichever records the store returned
    /// first. A nothing-matches outcome is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BarberHubError::Validation`] when the limit falls outside
    /// `[1, MAX_LIMIT]`, or a storage error from the repository.
    pub async fn list_barbershops(
        &self,
        query: ListQuery,
    ) -> Result<Vec<ListedBarbershop>, BarberHubError> {
        if !(1..=MAX_LIMIT).contains(&query.limit) {
            return Err(ValidationError::LimitOutOfRange.into());
        }

        let filter = ShopFilter {
            name_contains: query.name_contains,
        };
        let stored = self.repo.find(filter, query.limit).await?;

        let mut shops: Vec<ListedBarbershop> =
            stored.into_iter().map(ListedBarbershop::from_stored).collect();

        if let Some(origin) = query.near {
            for shop in &mut shops {
                let here = Coordinates::new(shop.lat, shop.lng);
                shop.distance_km = Some(origin.distance_km(here));
            }
            shops.sort_by(|a, b| {
                a.distance_km
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.distance_km.unwrap_or(f64::INFINITY))
            });
        }

        Ok(shops)
    }

    /// Insert the six fixed sample records at offsets from `origin`.
    ///
    /// Each sample goes through [`create_barbershop`](Self::create_barbershop)
    /// as a single insert. A mid-sequence failure aborts the remainder and
    /// leaves earlier inserts persisted.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an individual create.
    #[tracing::instrument(skip(self))]
    pub async fn seed_barbershops(
        &self,
        origin: Coordinates,
    ) -> Result<Vec<BarbershopId>, BarberHubError> {
        let mut created = Vec::with_capacity(SEED_SAMPLES.len());
        for sample in &SEED_SAMPLES {
            let shop = Barbershop::builder()
                .name(sample.name)
                .address(sample.address)
                .coordinates(Coordinates::new(
                    origin.lat + sample.dlat,
                    origin.lng + sample.dlng,
                ))
                .rating(sample.rating)
                .reviews(sample.reviews)
                .build()?;
            created.push(self.create_barbershop(shop).await?);
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryShopRepo {
        store: Mutex<Vec<StoredBarbershop>>,
    }

    impl Default for InMemoryShopRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(Vec::new()),
            }
        }
    }

    impl BarbershopRepository for InMemoryShopRepo {
        fn insert(
            &self,
            record: Barbershop,
        ) -> impl Future<Output = Result<BarbershopId, BarberHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let id = BarbershopId::new();
            store.push(StoredBarbershop { id, record });
            async move { Ok(id) }
        }

        fn find(
            &self,
            filter: ShopFilter,
            limit: u32,
        ) -> impl Future<Output = Result<Vec<StoredBarbershop>, BarberHubError>> + Send {
            let store = self.store.lock().unwrap();
            let needle = filter.name_contains.map(|s| s.to_lowercase());
            let result: Vec<StoredBarbershop> = store
                .iter()
                .filter(|s| {
                    needle
                        .as_deref()
                        .is_none_or(|n| s.record.name.to_lowercase().contains(n))
                })
                .take(limit as usize)
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn ping(&self) -> impl Future<Output = Result<(), BarberHubError>> + Send {
            async { Ok(()) }
        }
    }

    fn make_service() -> DirectoryService<InMemoryShopRepo> {
        DirectoryService::new(InMemoryShopRepo::default())
    }

    fn shop(name: &str, lat: f64, lng: f64) -> Barbershop {
        Barbershop::builder()
            .name(name)
            .address("1 Test St")
            .coordinates(Coordinates::new(lat, lng))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_list_barbershop() {
        let svc = make_service();
        let id = svc
            .create_barbershop(shop("Fade Masters", 1.0, 2.0))
            .await
            .unwrap();

        let listed = svc.list_barbershops(ListQuery::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id.to_string());
        assert_eq!(listed[0].name, "Fade Masters");
        assert!(listed[0].distance_km.is_none());
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut record = shop("x", 0.0, 0.0);
        record.name = String::new();

        let result = svc.create_barbershop(record).await;
        assert!(matches!(
            result,
            Err(BarberHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let svc = make_service();
        let listed = svc.list_barbershops(ListQuery::default()).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn should_filter_by_name_case_insensitively() {
        let svc = make_service();
        svc.create_barbershop(shop("Fade Masters", 0.0, 0.0))
            .await
            .unwrap();
        svc.create_barbershop(shop("Sharp Cuts", 0.0, 0.0))
            .await
            .unwrap();

        let listed = svc
            .list_barbershops(ListQuery {
                name_contains: Some("fade".to_string()),
                ..ListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Fade Masters");
    }

    #[tokio::test]
    async fn should_reject_limit_outside_bounds() {
        let svc = make_service();
        for limit in [0, 101] {
            let result = svc
                .list_barbershops(ListQuery {
                    limit,
                    ..ListQuery::default()
                })
                .await;
            assert!(matches!(
                result,
                Err(BarberHubError::Validation(ValidationError::LimitOutOfRange))
            ));
        }
    }

    #[tokio::test]
    async fn should_sort_by_distance_when_origin_given() {
        let svc = make_service();
        svc.create_barbershop(shop("Far", 10.0, 10.0)).await.unwrap();
        svc.create_barbershop(shop("Near", 0.01, 0.01)).await.unwrap();
        svc.create_barbershop(shop("Mid", 1.0, 1.0)).await.unwrap();

        let listed = svc
            .list_barbershops(ListQuery {
                near: Some(Coordinates::new(0.0, 0.0)),
                ..ListQuery::default()
            })
            .await
            .unwrap();

        let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Near", "Mid", "Far"]);
        let distances: Vec<f64> = listed.iter().map(|s| s.distance_km.unwrap()).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn should_truncate_before_sorting_when_limit_is_small() {
        // The limit caps the fetch, not the sorted output: the nearest shop
        // can be excluded when it sits past the fetch window.
        let svc = make_service();
        svc.create_barbershop(shop("Far", 10.0, 10.0)).await.unwrap();
        svc.create_barbershop(shop("Mid", 1.0, 1.0)).await.unwrap();
        svc.create_barbershop(shop("Near", 0.01, 0.01)).await.unwrap();

        let listed = svc
            .list_barbershops(ListQuery {
                near: Some(Coordinates::new(0.0, 0.0)),
                limit: 2,
                ..ListQuery::default()
            })
            .await
            .unwrap();

        let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Mid", "Far"]);
    }

    #[tokio::test]
    async fn should_seed_six_samples_at_fixed_offsets() {
        let svc = make_service();
        let created = svc
            .seed_barbershops(Coordinates::new(0.0, 0.0))
            .await
            .unwrap();
        assert_eq!(created.len(), 6);

        let listed = svc.list_barbershops(ListQuery::default()).await.unwrap();
        assert_eq!(listed.len(), 6);
        assert_eq!(listed[0].name, "Fade Masters");
        assert_eq!(listed[0].lat, 0.002);
        assert_eq!(listed[0].lng, 0.001);
        assert_eq!(listed[5].name, "Blade & Brush");
        assert_eq!(listed[5].lat, -0.001);
        assert_eq!(listed[5].lng, -0.002);

        // Ids come back in the fixed sample order.
        let ids: Vec<String> = created.iter().map(ToString::to_string).collect();
        let listed_ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, listed_ids);
    }

    #[tokio::test]
    async fn should_find_exactly_fade_masters_after_seeding() {
        let svc = make_service();
        svc.seed_barbershops(Coordinates::new(0.0, 0.0))
            .await
            .unwrap();

        let listed = svc
            .list_barbershops(ListQuery {
                name_contains: Some("Fade".to_string()),
                ..ListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Fade Masters");
    }

    #[tokio::test]
    async fn should_seed_repeatedly_without_conflict() {
        let svc = make_service();
        svc.seed_barbershops(Coordinates::new(0.0, 0.0))
            .await
            .unwrap();
        svc.seed_barbershops(Coordinates::new(0.0, 0.0))
            .await
            .unwrap();

        let listed = svc
            .list_barbershops(ListQuery {
                limit: MAX_LIMIT,
                ..ListQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 12);
    }

    #[test]
    fn should_omit_distance_from_json_when_absent() {
        let entry = ListedBarbershop {
            id: BarbershopId::new().to_string(),
            name: "Sharp Cuts".to_string(),
            address: "45 Oak Ave".to_string(),
            lat: 0.0,
            lng: 0.0,
            rating: 4.6,
            reviews: 150,
            phone: None,
            distance_km: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("distance_km").is_none());
        assert!(json.get("phone").is_some_and(serde_json::Value::is_null));
    }
}

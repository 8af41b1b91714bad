//! `SQLite` implementation of [`BarbershopRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use barberhub_app::ports::{BarbershopRepository, ShopFilter};
use barberhub_domain::barbershop::{Barbershop, StoredBarbershop};
use barberhub_domain::error::BarberHubError;
use barberhub_domain::geo::Coordinates;
use barberhub_domain::id::BarbershopId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`StoredBarbershop`].
struct Wrapper(StoredBarbershop);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let id = BarbershopId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(StoredBarbershop {
            id,
            record: Barbershop {
                name: row.try_get("name")?,
                address: row.try_get("address")?,
                coordinates: Coordinates {
                    lat: row.try_get("lat")?,
                    lng: row.try_get("lng")?,
                },
                rating: row.try_get("rating")?,
                reviews: row.try_get("reviews")?,
                phone: row.try_get("phone")?,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO barbershops (id, name, address, lat, lng, rating, reviews, phone) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT * FROM barbershops LIMIT ?";
const SELECT_BY_NAME: &str =
    "SELECT * FROM barbershops WHERE name LIKE '%' || ? || '%' LIMIT ?";
const PING: &str = "SELECT 1";

/// `SQLite`-backed barbershop repository.
///
/// Identifiers are assigned here at insert time; `find` returns rows in the
/// store's default ordering (no `ORDER BY`).
pub struct SqliteBarbershopRepository {
    pool: SqlitePool,
}

impl SqliteBarbershopRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BarbershopRepository for SqliteBarbershopRepository {
    fn insert(
        &self,
        record: Barbershop,
    ) -> impl Future<Output = Result<BarbershopId, BarberHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = BarbershopId::new();
            sqlx::query(INSERT)
                .bind(id.to_string())
                .bind(&record.name)
                .bind(&record.address)
                .bind(record.coordinates.lat)
                .bind(record.coordinates.lng)
                .bind(record.rating)
                .bind(record.reviews)
                .bind(&record.phone)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(id)
        }
    }

    fn find(
        &self,
        filter: ShopFilter,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<StoredBarbershop>, BarberHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = match filter.name_contains {
                // SQLite LIKE is case-insensitive for ASCII, which covers
                // the contains semantics of the name filter.
                Some(term) => sqlx::query_as(SELECT_BY_NAME)
                    .bind(term)
                    .bind(i64::from(limit)),
                None => sqlx::query_as(SELECT_ALL).bind(i64::from(limit)),
            };

            let rows: Vec<Wrapper> = query.fetch_all(&pool).await.map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn ping(&self) -> impl Future<Output = Result<(), BarberHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(PING)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;
            Ok(())
        }
    }
}

//! Barbershop — the single record type of the directory.

use serde::{Deserialize, Serialize};

use crate::error::{BarberHubError, ValidationError};
use crate::geo::Coordinates;
use crate::id::BarbershopId;

/// Rating applied when a record is created without one.
pub const DEFAULT_RATING: f64 = 4.5;

/// Review count applied when a record is created without one.
pub const DEFAULT_REVIEWS: i64 = 0;

/// A barbershop record as submitted for persistence.
///
/// Carries no identifier; the storage layer assigns a [`BarbershopId`] on
/// insert. Duplicates are allowed, there is no uniqueness constraint on
/// name or address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barbershop {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub rating: f64,
    pub reviews: i64,
    pub phone: Option<String>,
}

impl Barbershop {
    /// Create a builder for constructing a [`Barbershop`].
    #[must_use]
    pub fn builder() -> BarbershopBuilder {
        BarbershopBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BarberHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), BarberHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// A persisted record together with its storage-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBarbershop {
    pub id: BarbershopId,
    pub record: Barbershop,
}

/// Step-by-step builder for [`Barbershop`].
///
/// Optional fields receive their defaults at [`build`](Self::build) time:
/// rating [`DEFAULT_RATING`], reviews [`DEFAULT_REVIEWS`], no phone.
#[derive(Debug, Default)]
pub struct BarbershopBuilder {
    name: Option<String>,
    address: Option<String>,
    coordinates: Option<Coordinates>,
    rating: Option<f64>,
    reviews: Option<i64>,
    phone: Option<String>,
}

impl BarbershopBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn reviews(mut self, reviews: i64) -> Self {
        self.reviews = Some(reviews);
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Consume the builder, validate, and return a [`Barbershop`].
    ///
    /// # Errors
    ///
    /// Returns [`BarberHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Barbershop, BarberHubError> {
        let shop = Barbershop {
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            coordinates: self.coordinates.unwrap_or(Coordinates { lat: 0.0, lng: 0.0 }),
            rating: self.rating.unwrap_or(DEFAULT_RATING),
            reviews: self.reviews.unwrap_or(DEFAULT_REVIEWS),
            phone: self.phone,
        };
        shop.validate()?;
        Ok(shop)
    }
}

use async_trait::async_trait;

use super::errors::LocationError;
use super::model::Coordinates;

/// Service port for turning a coordinate pair into a street address.
#[async_trait]
pub trait GeocodingService: Send + Sync {
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<String, LocationError>;
}

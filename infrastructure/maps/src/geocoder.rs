use async_trait::async_trait;
use reqwest::Client;

use business::domain::location::errors::LocationError;
use business::domain::location::model::Coordinates;
use business::domain::location::services::GeocodingService;

/// Reverse geocoding through the Google Geocoding API.
pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleGeocoder {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://maps.googleapis.com/maps/api/geocode/json".to_string(),
        }
    }

    fn parse_response(data: &serde_json::Value) -> Result<String, LocationError> {
        match data["status"].as_str() {
            Some("OK") => {}
            Some("ZERO_RESULTS") => return Err(LocationError::NoResults),
            _ => return Err(LocationError::LookupFailed),
        }

        data["results"]
            .as_array()
            .and_then(|results| results.first())
            .and_then(|first| first["formatted_address"].as_str())
            .map(|address| address.to_string())
            .ok_or(LocationError::NoResults)
    }
}

#[async_trait]
impl GeocodingService for GoogleGeocoder {
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<String, LocationError> {
        let latlng = format!("{},{}", coordinates.latitude(), coordinates.longitude());

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("latlng", latlng.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|_| LocationError::LookupFailed)?;

        if !response.status().is_success() {
            return Err(LocationError::LookupFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| LocationError::LookupFailed)?;

        Self::parse_response(&data)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::location::errors::LocationError;
use crate::domain::location::model::{AddressPrefill, AddressSource, Coordinates};
use crate::domain::location::services::GeocodingService;
use crate::domain::location::use_cases::prefill_address::{
    PrefillAddressParams, PrefillAddressUseCase,
};
use crate::domain::logger::Logger;

/// Turns a device position into delivery address text.
///
/// Without a geocoder, or when the lookup fails, the coordinates themselves
/// are used and a warning is attached.
pub struct PrefillAddressUseCaseImpl {
    pub geocoder: Option<Arc<dyn GeocodingService>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PrefillAddressUseCase for PrefillAddressUseCaseImpl {
    async fn execute(&self, params: PrefillAddressParams) -> Result<AddressPrefill, LocationError> {
        let coordinates = Coordinates::new(params.latitude, params.longitude)?;

        let lookup = match &self.geocoder {
            Some(geocoder) => geocoder.reverse_geocode(coordinates).await,
            None => Err(LocationError::Unsupported),
        };

        match lookup {
            Ok(address) => {
                self.logger.debug(&format!(
                    "Reverse geocoded ({}, {})",
                    coordinates.latitude(),
                    coordinates.longitude()
                ));
                Ok(AddressPrefill {
                    address,
                    source: AddressSource::Geocoded,
                    warning: None,
                })
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Falling back to raw coordinates: {}", e));
                Ok(AddressPrefill {
                    address: coordinates.describe(),
                    source: AddressSource::Coordinates,
                    warning: Some(e.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Geocoder {}

        #[async_trait]
        impl GeocodingService for Geocoder {
            async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<String, LocationError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params() -> PrefillAddressParams {
        PrefillAddressParams {
            latitude: -33.924870,
            longitude: 18.424055,
        }
    }

    #[tokio::test]
    async fn should_use_geocoded_address() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_reverse_geocode()
            .times(1)
            .returning(|_| Ok("1 Adderley St, Cape Town, 8000".to_string()));
        let use_case = PrefillAddressUseCaseImpl {
            geocoder: Some(Arc::new(geocoder)),
            logger: mock_logger(),
        };

        let prefill = use_case.execute(params()).await.unwrap();

        assert_eq!(prefill.address, "1 Adderley St, Cape Town, 8000");
        assert_eq!(prefill.source, AddressSource::Geocoded);
        assert!(prefill.warning.is_none());
    }

    #[tokio::test]
    async fn should_fall_back_to_coordinates_when_lookup_fails() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_reverse_geocode()
            .returning(|_| Err(LocationError::NoResults));
        let use_case = PrefillAddressUseCaseImpl {
            geocoder: Some(Arc::new(geocoder)),
            logger: mock_logger(),
        };

        let prefill = use_case.execute(params()).await.unwrap();

        assert_eq!(prefill.address, "Current Location (-33.9249, 18.4241)");
        assert_eq!(prefill.source, AddressSource::Coordinates);
        assert_eq!(prefill.warning.as_deref(), Some("location.no_results"));
    }

    #[tokio::test]
    async fn should_fall_back_to_coordinates_without_geocoder() {
        let use_case = PrefillAddressUseCaseImpl {
            geocoder: None,
            logger: mock_logger(),
        };

        let prefill = use_case.execute(params()).await.unwrap();

        assert_eq!(prefill.source, AddressSource::Coordinates);
        assert_eq!(prefill.warning.as_deref(), Some("location.unsupported"));
    }

    #[tokio::test]
    async fn should_reject_invalid_coordinates() {
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_reverse_geocode().never();
        let use_case = PrefillAddressUseCaseImpl {
            geocoder: Some(Arc::new(geocoder)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PrefillAddressParams {
                latitude: 0.0,
                longitude: 200.0,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            LocationError::InvalidCoordinates
        ));
    }
}

use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::location::model::{AddressPrefill, AddressSource};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PrefillAddressRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum AddressSourceDto {
    #[oai(rename = "geocoded")]
    Geocoded,
    #[oai(rename = "coordinates")]
    Coordinates,
}

impl From<AddressSource> for AddressSourceDto {
    fn from(source: AddressSource) -> Self {
        match source {
            AddressSource::Geocoded => AddressSourceDto::Geocoded,
            AddressSource::Coordinates => AddressSourceDto::Coordinates,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PrefillAddressResponse {
    pub address: String,
    pub source: AddressSourceDto,
    /// Set when the place lookup failed and raw coordinates were used
    pub warning: Option<String>,
}

impl From<AddressPrefill> for PrefillAddressResponse {
    fn from(prefill: AddressPrefill) -> Self {
        Self {
            address: prefill.address,
            source: prefill.source.into(),
            warning: prefill.warning,
        }
    }
}

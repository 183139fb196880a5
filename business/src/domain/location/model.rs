use super::errors::LocationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(LocationError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Fallback address text when no place name is available.
    pub fn describe(&self) -> String {
        format!(
            "Current Location ({:.4}, {:.4})",
            self.latitude, self.longitude
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSource {
    Geocoded,
    Coordinates,
}

/// Text to drop into the delivery address field.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressPrefill {
    pub address: String,
    pub source: AddressSource,
    pub warning: Option<String>,
}

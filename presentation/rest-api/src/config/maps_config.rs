/// Google Geocoding access. Reverse geocoding is disabled without a key.
pub struct MapsConfig {
    pub api_key: Option<String>,
}

impl MapsConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GOOGLE_MAPS_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        }
    }
}

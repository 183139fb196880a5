use super::{
    checkout_config::CheckoutConfig, cors_config, email_config::EmailConfig,
    firebase_config::FirebaseConfig, maps_config::MapsConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub email: EmailConfig,
    pub firebase: FirebaseConfig,
    pub maps: MapsConfig,
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            email: EmailConfig::from_env()?,
            firebase: FirebaseConfig::require_from_env()?,
            maps: MapsConfig::from_env(),
            checkout: CheckoutConfig::from_env(),
        })
    }
}

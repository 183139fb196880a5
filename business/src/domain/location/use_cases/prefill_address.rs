use async_trait::async_trait;

use crate::domain::location::errors::LocationError;
use crate::domain::location::model::AddressPrefill;

pub struct PrefillAddressParams {
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait]
pub trait PrefillAddressUseCase: Send + Sync {
    async fn execute(&self, params: PrefillAddressParams) -> Result<AddressPrefill, LocationError>;
}

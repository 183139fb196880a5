#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location.invalid_coordinates")]
    InvalidCoordinates,
    #[error("location.unsupported")]
    Unsupported,
    #[error("location.lookup_failed")]
    LookupFailed,
    #[error("location.no_results")]
    NoResults,
}

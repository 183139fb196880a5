/// Shared secret for the admin order endpoints.
pub struct AdminConfig {
    pub api_key: Option<String>,
}

impl AdminConfig {
    /// ADMIN_API_KEY unset or blank locks the admin endpoints.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("ADMIN_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        match &self.api_key {
            Some(expected) => constant_time_eq(expected.as_bytes(), candidate.as_bytes()),
            None => false,
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_matching_key() {
        let config = AdminConfig {
            api_key: Some("s3cret".to_string()),
        };

        assert!(config.accepts("s3cret"));
        assert!(!config.accepts("s3cre"));
        assert!(!config.accepts("S3CRET"));
    }

    #[test]
    fn should_reject_everything_when_key_unset() {
        let config = AdminConfig { api_key: None };

        assert!(!config.accepts(""));
        assert!(!config.accepts("anything"));
    }
}

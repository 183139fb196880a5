use reqwest::Client;

/// Shared Resend HTTP client configuration.
pub struct ResendClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://api.resend.com".to_string(),
        }
    }

    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    pub fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

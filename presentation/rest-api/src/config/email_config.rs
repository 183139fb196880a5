/// Where new-order emails go.
pub struct EmailConfig {
    pub api_key: String,
    pub from: String,
    pub to: Vec<String>,
}

impl EmailConfig {
    /// Environment variables:
    /// - RESEND_API_KEY (required)
    /// - ORDER_EMAIL_FROM (default: "Braai & Grill <onboarding@resend.dev>")
    /// - ORDER_EMAIL_TO: comma-separated recipients (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("RESEND_API_KEY")
            .map_err(|_| anyhow::anyhow!("RESEND_API_KEY must be set"))?;
        let from = std::env::var("ORDER_EMAIL_FROM")
            .unwrap_or_else(|_| "Braai & Grill <onboarding@resend.dev>".to_string());
        let to = parse_recipients(
            &std::env::var("ORDER_EMAIL_TO")
                .map_err(|_| anyhow::anyhow!("ORDER_EMAIL_TO must be set"))?,
        );
        if to.is_empty() {
            anyhow::bail!("ORDER_EMAIL_TO has no recipients");
        }

        Ok(Self { api_key, from, to })
    }
}

fn parse_recipients(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

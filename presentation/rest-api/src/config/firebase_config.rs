/// Firebase project whose ID tokens identify customers at checkout.
#[derive(Debug)]
pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    /// Reads FIREBASE_PROJECT_ID; `None` when unset or blank.
    pub fn from_env() -> Option<Self> {
        Self::parse(std::env::var("FIREBASE_PROJECT_ID").ok())
    }

    /// Startup check: checkout cannot authenticate anyone without a project id.
    pub fn require_from_env() -> anyhow::Result<Self> {
        Self::require(std::env::var("FIREBASE_PROJECT_ID").ok())
    }

    fn parse(value: Option<String>) -> Option<Self> {
        value
            .filter(|id| !id.trim().is_empty())
            .map(|project_id| Self { project_id })
    }

    fn require(value: Option<String>) -> anyhow::Result<Self> {
        Self::parse(value).ok_or_else(|| anyhow::anyhow!("FIREBASE_PROJECT_ID must be set"))
    }
}

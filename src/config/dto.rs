use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    /// Notification destination. Treated as a secret and never logged.
    pub webhook_url: Option<String>,
    pub disable_proxy: bool,
}

use std::env;

use reqwest::Url;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "3000";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();
    load_config_from(|key| env::var(key).ok())
}

/// Builds the config from an arbitrary variable source so it can be exercised
/// without touching the process environment.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = lookup("IPV4_RELAY_PORT")
        .or_else(|| lookup("PORT"))
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let webhook_url = lookup("IPV4_RELAY_WEBHOOK_URL")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(validate_webhook_url)
        .transpose()?;

    let disable_proxy = lookup("IPV4_RELAY_DISABLE_PROXY")
        .map(|value| parse_bool(&value))
        .unwrap_or(false);

    Ok(AppConfig {
        port,
        webhook_url,
        disable_proxy,
    })
}

fn validate_webhook_url(value: String) -> Result<String, AppError> {
    // The URL embeds a credential, so the error never echoes it back.
    let url = Url::parse(&value).map_err(|err| {
        AppError::configuration(format!("IPV4_RELAY_WEBHOOK_URL is not a valid URL: {err}"))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(value),
        scheme => Err(AppError::configuration(format!(
            "IPV4_RELAY_WEBHOOK_URL must use http or https, got {scheme}"
        ))),
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "1" | "TRUE" | "True")
}

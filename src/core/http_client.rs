use std::time::Duration;

use reqwest::Client;

pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Every request made through the returned client is cut off after `timeout`.
pub fn build_http_client(
    disable_proxy: bool,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(concat!("ipv4-relay/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout);

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}

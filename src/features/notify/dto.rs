use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub content: String,
}

impl NotificationPayload {
    pub fn for_address(address: Ipv4Addr) -> Self {
        Self {
            content: format!("IPv4: {address}"),
        }
    }
}

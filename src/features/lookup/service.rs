use std::net::IpAddr;
use std::sync::Arc;

use axum::http::HeaderMap;

use crate::features::lookup::dto::LookupOutcome;
use crate::features::lookup::extractor::{CandidateHeaders, extract_ipv4};
use crate::features::notify::{NotificationPayload, Notifier};

pub struct LookupService {
    candidates: CandidateHeaders,
    notifier: Option<Arc<dyn Notifier>>,
}

impl LookupService {
    /// `notifier` is `None` when no destination is configured.
    pub fn new(candidates: CandidateHeaders, notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self {
            candidates,
            notifier,
        }
    }

    pub async fn lookup(&self, headers: &HeaderMap, peer: Option<IpAddr>) -> LookupOutcome {
        let address = extract_ipv4(&self.candidates, headers, peer);

        match address {
            Some(address) => {
                tracing::debug!(%address, "resolved client address");
                if let Some(notifier) = &self.notifier {
                    let payload = NotificationPayload::for_address(address);
                    if let Err(err) = notifier.notify(&payload).await {
                        tracing::warn!(error = %err, "notification dropped");
                    }
                }
            }
            None => tracing::debug!(?peer, "no IPv4 address in request"),
        }

        LookupOutcome { address }
    }
}

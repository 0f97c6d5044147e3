pub mod client;
pub mod dto;

pub use client::{Notifier, WebhookNotifier};
pub use dto::NotificationPayload;

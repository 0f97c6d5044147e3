pub mod dto;
pub mod loader;

pub use dto::AppConfig;
pub use loader::{load_config, load_config_from};

pub mod dto;
pub mod extractor;
pub mod handler;
pub mod service;

pub use dto::LookupOutcome;
pub use extractor::{CandidateHeaders, DEFAULT_CANDIDATE_HEADERS, extract_ipv4};
pub use handler::handle_lookup;
pub use service::LookupService;

pub mod lookup;
pub mod notify;

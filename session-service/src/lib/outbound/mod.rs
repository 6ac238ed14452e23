pub mod notify;
pub mod stores;

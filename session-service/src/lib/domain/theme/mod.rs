pub mod models;
pub mod service;

pub use models::ThemeMode;
pub use service::ThemeState;

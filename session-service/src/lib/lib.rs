pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::session;
pub use domain::theme;

// Re-export commonly used types
pub use domain::session::models::CurrentUser;
pub use domain::session::service::SessionService;
pub use domain::theme::models::ThemeMode;
pub use domain::theme::service::ThemeState;
pub use outbound::stores;

//! Core business logic: exchange registry, status evaluation and settings

pub mod config;
pub mod errors;
pub mod exchange;
pub mod log;
pub mod selection;
pub mod status;

// Re-export main types for cleaner imports
pub use config::AppConfig;
pub use errors::{ConfigurationError, Error};
pub use exchange::{ExchangeDefinition, builtin_exchanges, validate_registry};
pub use selection::Selection;
pub use status::{ExchangeView, enabled_views, evaluate};

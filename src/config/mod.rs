pub mod defaults;
mod error;
pub mod loader;
mod manager;
mod types;

pub use defaults::{default_for, with_defaults};
pub use error::ConfigLoadError;
pub use manager::ConfigManager;
pub use types::{ConfigDocument, ConfigMap, Scalar, Section};

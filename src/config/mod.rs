//! Configuration: typed options, file loading and validation.

mod service;
mod types;
mod validation;

pub use service::{config_dir, default_config_path, load_config, read_config};
pub use types::{AppConfig, ThemeMode, WhatsNewPolicy};
pub use validation::{ValidationWarning, validate_config};

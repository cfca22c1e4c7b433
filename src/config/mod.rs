#[cfg(feature = "cli")]
pub mod cli;
pub mod page_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use page_config::{ConstantConfig, FieldBinding, GreetingConfig, PageConfig, ServerConfig};

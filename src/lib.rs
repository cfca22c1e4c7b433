pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpGateway, page::MemoryPage};
pub use config::PageConfig;
pub use crate::core::{
    constant::ConstantRequester,
    engine::ActionEngine,
    greeting::{GreetingMethod, GreetingRequester},
    validator::is_valid_name,
};
pub use domain::model::ActionOutcome;
pub use domain::ports::{Action, Page};
pub use utils::error::{ClientError, Result};

pub mod constant;
pub mod engine;
pub mod greeting;
pub mod validator;

pub use crate::domain::model::{ActionOutcome, GreetingMessage, RequestState};
pub use crate::domain::ports::{Action, Page};
pub use crate::utils::error::Result;

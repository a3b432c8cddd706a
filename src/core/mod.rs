pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod types;

pub use config::{EncumbranceOption, InitiativeMode, RulesConfig, ToHitSystem};
pub use context::RulesContext;
pub use error::{EngineError, Result};

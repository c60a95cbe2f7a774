pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::RosterConfig};
pub use crate::core::{
    Assignment, ConstraintRegistry, Couple, DrawEngine, DrawPhase, Pair, Session, Step,
};
pub use utils::error::{DrawError, Result, SantaError};

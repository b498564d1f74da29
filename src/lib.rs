pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::rates::OpenErApi;
pub use crate::config::{CliConfig, Settings};
pub use crate::core::menu::MenuSession;
pub use crate::utils::error::{CalcError, Result};

pub mod expr;
pub mod menu;
pub mod units;

pub use crate::domain::model::{Category, MenuChoice, RateQuery, TemperatureScale};
pub use crate::domain::ports::RateSource;
pub use crate::utils::error::Result;

use crate::utils::error::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// One top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BasicCalc,
    ScientificCalc,
    Currency,
    Units,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::BasicCalc),
            "2" => Ok(MenuChoice::ScientificCalc),
            "3" => Ok(MenuChoice::Currency),
            "4" => Ok(MenuChoice::Units),
            "5" => Ok(MenuChoice::Exit),
            other => Err(CalcError::InvalidChoice {
                input: other.to_string(),
            }),
        }
    }
}

/// A conversion category from the unit tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Category names are case-insensitive on input.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            other => Err(CalcError::UnknownCategory {
                name: other.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Temperature scale code. Restricted to the single-letter codes c/f/k.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn parse(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(TemperatureScale::Celsius),
            "f" => Ok(TemperatureScale::Fahrenheit),
            "k" => Ok(TemperatureScale::Kelvin),
            other => Err(CalcError::UnknownUnit {
                name: other.to_string(),
            }),
        }
    }
}

/// One currency conversion request. Ephemeral; built from prompt input and
/// dropped at the end of the menu iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuery {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

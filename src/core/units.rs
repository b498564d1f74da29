//! Unit conversion over fixed ratio tables.
//!
//! Length and weight convert through a ratio relative to the category's base
//! unit (meter, kilogram): `value / ratio[from] * ratio[to]`. Temperature
//! has no common ratio and pivots through Celsius instead.

use crate::domain::model::{Category, TemperatureScale};
use crate::utils::error::{CalcError, Result};

const LENGTH_RATIOS: &[(&str, f64)] = &[
    ("m", 1.0),
    ("cm", 100.0),
    ("mm", 1000.0),
    ("km", 0.001),
    ("inch", 39.3701),
    ("foot", 3.28084),
];

const WEIGHT_RATIOS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("g", 1000.0),
    ("mg", 1_000_000.0),
    ("lb", 2.20462),
    ("oz", 35.274),
];

fn ratio_table(category: Category) -> &'static [(&'static str, f64)] {
    match category {
        Category::Length => LENGTH_RATIOS,
        Category::Weight => WEIGHT_RATIOS,
        // Callers dispatch temperature before reaching the ratio path.
        Category::Temperature => &[],
    }
}

fn lookup_ratio(category: Category, unit: &str) -> Result<f64> {
    let normalized = unit.trim().to_ascii_lowercase();
    ratio_table(category)
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, ratio)| *ratio)
        .ok_or(CalcError::UnknownUnit { name: normalized })
}

fn to_celsius(value: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value - 273.15,
    }
}

fn from_celsius(value: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => value * 9.0 / 5.0 + 32.0,
        TemperatureScale::Kelvin => value + 273.15,
    }
}

/// Converts `value` between two units of the named category. Category and
/// unit names are case-insensitive.
pub fn convert(category: &str, value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    convert_between(Category::parse(category)?, value, from_unit, to_unit)
}

/// Same as [`convert`] for an already-resolved category.
pub fn convert_between(category: Category, value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    match category {
        Category::Temperature => {
            let from = TemperatureScale::parse(from_unit)?;
            let to = TemperatureScale::parse(to_unit)?;
            Ok(from_celsius(to_celsius(value, from), to))
        }
        Category::Length | Category::Weight => {
            let ratio_from = lookup_ratio(category, from_unit)?;
            let ratio_to = lookup_ratio(category, to_unit)?;
            Ok(value / ratio_from * ratio_to)
        }
    }
}

/// Unit names accepted by a category, for the menu prompt.
pub fn unit_names(category: Category) -> Vec<&'static str> {
    match category {
        Category::Temperature => vec!["c", "f", "k"],
        _ => ratio_table(category).iter().map(|(name, _)| *name).collect(),
    }
}

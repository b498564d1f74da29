use crate::utils::error::{CalcError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CalcError::Config {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CalcError::Config {
                message: format!("{}: unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(CalcError::Config {
            message: format!("{}: invalid URL format: {}", field_name, e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CalcError::Config {
            message: format!("{}: value must be at least {}", field_name, min_value),
        });
    }
    Ok(())
}

/// Normalizes a user-entered currency code to uppercase. Codes must be
/// non-empty and ASCII-alphabetic; anything else cannot name a currency.
pub fn normalize_currency_code(code: &str) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CalcError::UnknownCurrency {
            code: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_ascii_uppercase())
}

use crate::utils::error::{Result, SpamsenseError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SpamsenseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// An area code is exactly three ASCII digits.
pub fn validate_area_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpamsenseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Area code must be exactly 3 digits".to_string(),
        });
    }
    Ok(())
}

pub fn validate_area_codes(field_name: &str, codes: &[String]) -> Result<()> {
    for code in codes {
        validate_area_code(field_name, code)?;
    }
    Ok(())
}

use crate::utils::error::{MenuError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 解析價格文字：去除前後空白後必須是有限且非負的數字，-0 也不接受
pub fn parse_price(input: &str) -> Result<f64> {
    let invalid = || MenuError::InvalidPrice {
        input: input.to_string(),
    };

    let value: f64 = input.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value.is_sign_negative() {
        return Err(invalid());
    }
    Ok(value)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

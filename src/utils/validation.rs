use crate::core::range::RangeRule;
use crate::utils::error::{Result, ValidateError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 區間本身必須合理: min <= max
pub fn validate_range_rule(field_name: &str, rule: RangeRule) -> Result<()> {
    if rule.min > rule.max {
        return Err(ValidateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rule.to_string(),
            reason: format!("min ({}) must not exceed max ({})", rule.min, rule.max),
        });
    }
    Ok(())
}

/// 區間必須落在允許的外層區間之內
pub fn validate_range_within(field_name: &str, rule: RangeRule, outer: RangeRule) -> Result<()> {
    validate_range_rule(field_name, rule)?;

    if rule.min < outer.min || rule.max > outer.max {
        return Err(ValidateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rule.to_string(),
            reason: format!("Range must lie within {}", outer),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range_rule() {
        assert!(validate_range_rule("main_menu.options", RangeRule::new(1, 5)).is_ok());
        assert!(validate_range_rule("main_menu.options", RangeRule::new(3, 3)).is_ok());
        assert!(validate_range_rule("main_menu.options", RangeRule::new(5, 1)).is_err());
    }

    #[test]
    fn test_validate_range_within() {
        let months = RangeRule::new(1, 12);
        assert!(validate_range_within("date.month", RangeRule::new(1, 6), months).is_ok());
        assert!(validate_range_within("date.month", RangeRule::new(0, 12), months).is_err());
        assert!(validate_range_within("date.month", RangeRule::new(1, 13), months).is_err());
        assert!(validate_range_within("date.month", RangeRule::new(12, 1), months).is_err());
    }
}

use crate::inputs::ProjectInputs;
use std::fmt;

#[derive(Debug, Clone)]
pub struct InputValidationError {
    message: String,
}

impl InputValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InputValidationError {}

/// Boundary validation for values arriving from outside the process (CLI,
/// HTTP, stored files). The engines themselves degrade gracefully via
/// `ProjectInputs::sanitized`; this rejects data that should never have been
/// persisted or submitted in the first place.
pub fn validate_inputs(inputs: &ProjectInputs) -> Result<(), InputValidationError> {
    check_quantity("area", inputs.area)?;
    check_quantity("kitchen_length", inputs.kitchen_length)?;
    check_quantity("wardrobe_length", inputs.wardrobe_length)?;
    Ok(())
}

fn check_quantity(field: &str, value: f64) -> Result<(), InputValidationError> {
    if !value.is_finite() {
        return Err(InputValidationError::new(format!(
            "{field} must be a finite number (got {value})"
        )));
    }
    if value < 0.0 {
        return Err(InputValidationError::new(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_defaults_and_zeroes() {
        assert!(validate_inputs(&ProjectInputs::default()).is_ok());
        let mut zeroed = ProjectInputs::default();
        zeroed.area = 0.0;
        zeroed.kitchen_length = 0.0;
        zeroed.wardrobe_length = 0.0;
        assert!(validate_inputs(&zeroed).is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        let mut inputs = ProjectInputs::default();
        inputs.area = -1.0;
        assert!(validate_inputs(&inputs).is_err());

        let mut inputs = ProjectInputs::default();
        inputs.kitchen_length = f64::NAN;
        assert!(validate_inputs(&inputs).is_err());
    }
}

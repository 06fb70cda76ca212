use thiserror::Error;

/// Failures raised by the lookup tables and the scenario guard.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("Unknown district: '{0}'")]
    UnknownDistrict(String),

    #[error("Unknown roof type: '{0}' (expected concrete, metal-sheet, tile or asphalt)")]
    UnknownRoofType(String),

    #[error("Invalid input: {field} = {value}, allowed: {allowed}")]
    InvalidInput {
        field: &'static str,
        value: String,
        allowed: &'static str,
    },
}

impl PlannerError {
    pub fn invalid(field: &'static str, value: impl ToString, allowed: &'static str) -> Self {
        PlannerError::InvalidInput {
            field,
            value: value.to_string(),
            allowed,
        }
    }
}

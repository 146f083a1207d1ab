//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`VoltwiseError`] via `#[from]`.

/// Top-level error for the decision core.
#[derive(Debug, thiserror::Error)]
pub enum VoltwiseError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Input rejected at the boundary before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput {
        /// Name of the offending field, as it appears on the wire.
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}

/// A textual value did not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_offending_field_in_message() {
        let err = ValidationError::InvalidInput {
            field: "load_demand_kw",
            reason: "must not be negative",
        };
        assert_eq!(
            err.to_string(),
            "invalid input for `load_demand_kw`: must not be negative"
        );
        assert_eq!(err.field(), "load_demand_kw");
    }

    #[test]
    fn should_convert_validation_error_into_voltwise_error() {
        let err: VoltwiseError = ValidationError::InvalidInput {
            field: "battery_soc_percent",
            reason: "must be within 0..=100",
        }
        .into();
        assert!(matches!(err, VoltwiseError::Validation(_)));
    }
}

//! Shared validation helpers for inbound HTTP adapters.
//!
//! Payloads are validated before any store interaction; failures surface as
//! `invalid_request` domain errors with `{field, code, value?}` details
//! rather than crashing into a 500.

use serde_json::json;

use crate::domain::{BATTERY_LEVEL_RANGE, Error, RobotStatus};

/// Validation error codes attached to the `details.code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
    OutOfRange,
    UnknownStatus,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::UnknownStatus => "unknown_status",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_error_with_value(
    field: FieldName,
    message: String,
    code: ErrorCode,
    value: impl Into<serde_json::Value>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value.into(),
        "code": code.as_str(),
    }))
}

/// Require a present, non-empty string field.
pub(crate) fn require_non_empty(value: Option<String>, field: FieldName) -> Result<String, Error> {
    let Some(value) = value else {
        let name = field.as_str();
        return Err(field_error(
            field,
            format!("missing required field: {name}"),
            ErrorCode::MissingField,
        ));
    };
    non_empty(value, field)
}

/// Reject strings that are empty once trimmed.
pub(crate) fn non_empty(value: String, field: FieldName) -> Result<String, Error> {
    if value.trim().is_empty() {
        let name = field.as_str();
        return Err(field_error(
            field,
            format!("{name} must not be empty"),
            ErrorCode::EmptyField,
        ));
    }
    Ok(value)
}

/// Parse an optional status string against the known status set.
pub(crate) fn parse_optional_status(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<RobotStatus>, Error> {
    value
        .map(|raw| {
            raw.parse::<RobotStatus>().map_err(|_| {
                let name = field.as_str();
                field_error_with_value(
                    field,
                    format!("{name} must be one of active, idle, maintenance"),
                    ErrorCode::UnknownStatus,
                    raw,
                )
            })
        })
        .transpose()
}

/// Check a battery percentage against the permitted range.
pub(crate) fn check_battery_level(value: i32, field: FieldName) -> Result<i32, Error> {
    if !BATTERY_LEVEL_RANGE.contains(&value) {
        let name = field.as_str();
        return Err(field_error_with_value(
            field,
            format!("{name} must be between 0 and 100"),
            ErrorCode::OutOfRange,
            value,
        ));
    }
    Ok(value)
}

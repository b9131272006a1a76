use thiserror::Error;

/// Validation failures raised while assembling a SERPS request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerpsRequestError {
    #[error("SERPS call does not support the parameter {field}")]
    UnknownField { field: String },

    #[error("{field} does not support the value {value}")]
    InvalidValue { field: String, value: String },

    #[error("{field} expects {expected}")]
    InvalidArgument { field: String, expected: &'static str },
}

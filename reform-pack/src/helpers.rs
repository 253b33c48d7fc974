//! Helper functions for carrier operations

use reform_core::{Pack, ReformError, Value};

/// The pipe input must be a carrier produced by `attach`
pub fn require_pack<'a>(value: &'a Value, func: &str) -> Result<&'a Pack, ReformError> {
    match value {
        Value::Pack(pack) => Ok(pack),
        _ => Err(ReformError::protocol(func)),
    }
}

/// Argument names are non-empty text
pub fn require_name<'a>(value: &'a Value, func: &str) -> Result<&'a str, ReformError> {
    match value {
        Value::Text(s) if !s.is_empty() => Ok(s.as_str()),
        Value::Text(_) => Err(ReformError::arg_type(func, "name", "non-empty string", "empty string")),
        other => Err(ReformError::arg_type(func, "name", "string", other.type_name())),
    }
}

/// The last argument is the pipe input
pub fn pipe_input<'a>(args: &'a [Value], func: &str) -> Result<&'a Value, ReformError> {
    args.last().ok_or_else(|| ReformError::arg_count(func, 1, 0))
}

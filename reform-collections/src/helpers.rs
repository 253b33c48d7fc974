//! Helper functions for collection builders
//!
//! Common utilities for extracting and validating typed inputs.

use reform_core::{ReformError, Value};

/// Extract text, failing on any other kind
pub fn require_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, ReformError> {
    match value {
        Value::Text(s) => Ok(s.as_str()),
        other => Err(ReformError::arg_type(func, arg, "string", other.type_name())),
    }
}

/// Extract an integer; floats are not truncated
pub fn require_int(value: &Value, func: &str, arg: &str) -> Result<i64, ReformError> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(ReformError::arg_type(func, arg, "int", other.type_name())),
    }
}

/// Extract a list of text elements
pub fn require_text_list<'a>(value: &'a Value, func: &str, arg: &str) -> Result<Vec<&'a str>, ReformError> {
    let items = match value {
        Value::List(items) => items,
        other => return Err(ReformError::arg_type(func, arg, "list", other.type_name())),
    };

    items
        .iter()
        .map(|item| match item {
            Value::Text(s) => Ok(s.as_str()),
            other => Err(ReformError::arg_type(func, arg, "list of strings", other.type_name())
                .with_note(format!("element {} is {}", item, other.type_name()))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reform_core::ErrorKind;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(&Value::from("a"), "f", "x").unwrap(), "a");
        assert!(require_text(&Value::from(1), "f", "x").unwrap_err().is(ErrorKind::ArgType));
    }

    #[test]
    fn test_require_int_rejects_float() {
        assert_eq!(require_int(&Value::from(3), "f", "n").unwrap(), 3);
        assert!(require_int(&Value::from(3.0), "f", "n").is_err());
    }

    #[test]
    fn test_require_text_list() {
        let list = Value::List(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(require_text_list(&list, "f", "l").unwrap(), vec!["a", "b"]);

        let mixed = Value::List(vec![Value::from("a"), Value::from(1)]);
        let err = require_text_list(&mixed, "f", "l").unwrap_err();
        assert!(err.message.contains("list of strings"));
    }
}

//! require: check that a named argument is bound, optionally with a type

use reform_plugin::prelude::*;
use crate::helpers::{pipe_input, require_name, require_pack};

pub struct Require;

static REQUIRE_ARGS: [ArgMeta; 3] = [
    ArgMeta {
        name: "name",
        typ: "Text",
        description: "Argument that must be bound",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "typeName",
        typ: "Text",
        description: "Exact runtime type name the value must have (int, float, string, bool, list, map, pack, null)",
        optional: true,
        default: None,
    },
    ArgMeta {
        name: "carrier",
        typ: "Pack",
        description: "Pipe input produced by attach",
        optional: false,
        default: None,
    },
];

static REQUIRE_EXAMPLES: [&str; 2] = [
    ". | attach \"a\" 1 | require \"a\" → the same Pack",
    ". | attach \"a\" 1 | require \"a\" \"string\" → TYPE_MISMATCH",
];

static REQUIRE_RELATED: [&str; 2] = ["attach", "extractArguments"];

impl FunctionPlugin for Require {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "require",
            aliases: &[],
            description: "Fail unless the named argument is attached (and has the given type); passes the Pack through",
            usage: "require(name, [typeName], carrier)",
            args: &REQUIRE_ARGS,
            returns: "Pack",
            examples: &REQUIRE_EXAMPLES,
            category: "pack",
            related: &REQUIRE_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        if args.len() != 2 && args.len() != 3 {
            return Err(ReformError::format("require takes a name and optionally a type name")
                .with_suggestion("Usage: require name [typeName]"));
        }

        let pack = require_pack(pipe_input(args, "require")?, "require")?;
        let name = require_name(&args[0], "require")?;

        let bound = pack
            .get(name)
            .ok_or_else(|| ReformError::missing_argument(name, &pack.arg_names()))?;

        if args.len() == 3 {
            let expected = match &args[1] {
                Value::Text(s) => s.as_str(),
                other => {
                    return Err(ReformError::format(format!(
                        "the type name given to require must be a string, {} found",
                        other.type_name()
                    )))
                }
            };
            let actual = bound.type_name();
            if actual != expected {
                return Err(ReformError::type_mismatch(name, expected, actual));
            }
        }

        Ok(Value::Pack(pack.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carrier() -> Value {
        let pack = Pack::wrap(Value::from("dot"), "arg1", Value::from("test"))
            .with_arg("arg2", Value::from(42));
        Value::Pack(pack)
    }

    #[test]
    fn test_require_present() {
        let result = Require.call(&[Value::from("arg1"), carrier()]).unwrap();
        assert_eq!(result, carrier());
    }

    #[test]
    fn test_require_with_matching_type() {
        let result = Require
            .call(&[Value::from("arg2"), Value::from("int"), carrier()])
            .unwrap();
        assert!(result.is_pack());
    }

    #[test]
    fn test_require_type_mismatch() {
        let err = Require
            .call(&[Value::from("arg2"), Value::from("string"), carrier()])
            .unwrap_err();
        assert!(err.is(ErrorKind::TypeMismatch));
        assert!(err.message.contains("expected string"));
        assert!(err.message.contains("actual int"));
    }

    #[test]
    fn test_require_no_coercion() {
        // A float is not an int even when integral
        let pack = Pack::wrap(Value::Null, "n", Value::from(2.0));
        let err = Require
            .call(&[Value::from("n"), Value::from("int"), Value::Pack(pack)])
            .unwrap_err();
        assert!(err.is(ErrorKind::TypeMismatch));
    }

    #[test]
    fn test_require_missing_reports_bound_names() {
        let err = Require.call(&[Value::from("arg3"), carrier()]).unwrap_err();
        assert!(err.is(ErrorKind::MissingArgument));
        assert!(err.message.contains("arg3"));
        assert!(err.message.contains("arg1, arg2"));
    }

    #[test]
    fn test_require_on_plain_value() {
        let err = Require.call(&[Value::from("arg1"), Value::from("dot")]).unwrap_err();
        assert!(err.is(ErrorKind::Protocol));
    }

    #[test]
    fn test_require_on_plain_value_with_bad_name() {
        // Carrier check comes before the name is looked at
        let err = Require.call(&[Value::from(""), Value::from("plain")]).unwrap_err();
        assert!(err.is(ErrorKind::Protocol));

        let err = Require
            .call(&[Value::from(7), Value::from("int"), Value::from("plain")])
            .unwrap_err();
        assert!(err.is(ErrorKind::Protocol));
    }

    #[test]
    fn test_require_bad_name_on_carrier() {
        let err = Require.call(&[Value::from(7), carrier()]).unwrap_err();
        assert!(err.is(ErrorKind::ArgType));
    }

    #[test]
    fn test_require_arity() {
        let err = Require.call(&[carrier()]).unwrap_err();
        assert!(err.is(ErrorKind::Format));

        let err = Require
            .call(&[Value::from("a"), Value::from("int"), Value::from("x"), carrier()])
            .unwrap_err();
        assert!(err.is(ErrorKind::Format));
    }

    #[test]
    fn test_require_type_name_must_be_text() {
        let err = Require
            .call(&[Value::from("arg2"), Value::from(1), carrier()])
            .unwrap_err();
        assert!(err.is(ErrorKind::Format));
    }
}

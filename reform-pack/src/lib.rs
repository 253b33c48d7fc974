//! Reform Pack Functions Plugin
//!
//! The argument-carrier protocol: `attach` wraps the pipe value in a `Pack`
//! and binds named arguments to it, `require` validates them, and
//! `extractArguments` or `discard` end the chain.

mod helpers;
mod attach;
mod validate;
mod extract;

pub use attach::Attach;
pub use validate::Require;
pub use extract::{ExtractArguments, Discard};

use reform_plugin::FunctionRegistry;

/// Load carrier functions into registry
pub fn load_pack_library(registry: FunctionRegistry) -> FunctionRegistry {
    registry
        .with_function(attach::Attach)
        .with_function(validate::Require)
        .with_function(extract::ExtractArguments)
        .with_function(extract::Discard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reform_plugin::prelude::*;

    fn registry() -> FunctionRegistry {
        load_pack_library(FunctionRegistry::new())
    }

    #[test]
    fn test_all_names_and_aliases_registered() {
        let reg = registry();
        for name in ["attach", "arg", "require", "extractArguments", "args", "discard", "done"] {
            assert!(reg.contains(name), "missing {}", name);
        }
        assert_eq!(reg.len(), 4);
    }

    #[test]
    fn test_wrapped_then_extracted() {
        let reg = registry();
        let dot = Value::from("origin");

        let packed = reg
            .call_function("arg", &[Value::from("x"), Value::from(1), dot.clone()])
            .unwrap();
        let packed = reg
            .call_function("arg", &[Value::from("y"), Value::from("two"), packed])
            .unwrap();
        let checked = reg
            .call_function("require", &[Value::from("x"), Value::from("int"), packed])
            .unwrap();
        assert_eq!(checked.as_pack().unwrap().origin(), &dot);

        let args = reg.call_function("args", &[checked]).unwrap();
        assert_eq!(args.field("x"), Some(Value::from(1)));
        assert_eq!(args.field("y"), Some(Value::from("two")));
    }

    #[test]
    fn test_require_before_attach_is_protocol_error() {
        let reg = registry();
        let err = reg
            .call_function("require", &[Value::from("x"), Value::from("plain")])
            .unwrap_err();
        assert!(err.is(ErrorKind::Protocol));
        assert_eq!(err.context.unwrap().function.as_deref(), Some("require"));
    }

    #[test]
    fn test_validation_only_chain_ends_in_null() {
        let reg = registry();
        let packed = reg
            .call_function("attach", &[Value::from("x"), Value::from(1), Value::Null])
            .unwrap();
        let checked = reg.call_function("require", &[Value::from("x"), packed]).unwrap();
        assert_eq!(reg.call_function("done", &[checked]).unwrap(), Value::Null);
    }
}

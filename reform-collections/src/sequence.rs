//! Sequence builders: makeSequence, appendToSequence

use reform_plugin::prelude::*;

// ============ MakeSequence ============

pub struct MakeSequence;

static MAKE_SEQUENCE_ARGS: [ArgMeta; 1] = [ArgMeta {
    name: "values",
    typ: "Any...",
    description: "Elements in order",
    optional: true,
    default: None,
}];

static MAKE_SEQUENCE_EXAMPLES: [&str; 2] = [
    "makeSequence 1 2 3 → [1, 2, 3]",
    "makeSequence → []",
];

static MAKE_SEQUENCE_RELATED: [&str; 2] = ["appendToSequence", "makeRange"];

impl FunctionPlugin for MakeSequence {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "makeSequence",
            aliases: &["slice"],
            description: "Build a list from the arguments",
            usage: "makeSequence(values...)",
            args: &MAKE_SEQUENCE_ARGS,
            returns: "List",
            examples: &MAKE_SEQUENCE_EXAMPLES,
            category: "collections/sequence",
            related: &MAKE_SEQUENCE_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        Ok(Value::List(args.to_vec()))
    }
}

// ============ AppendToSequence ============

pub struct AppendToSequence;

static APPEND_ARGS: [ArgMeta; 2] = [
    ArgMeta {
        name: "values",
        typ: "Any...",
        description: "Elements to append, in order",
        optional: true,
        default: None,
    },
    ArgMeta {
        name: "base",
        typ: "List",
        description: "Pipe input the values are appended to",
        optional: false,
        default: None,
    },
];

static APPEND_EXAMPLES: [&str; 1] = [
    "makeRange 3 | appendToSequence 3 4 → [0, 1, 2, 3, 4]",
];

static APPEND_RELATED: [&str; 1] = ["makeSequence"];

impl FunctionPlugin for AppendToSequence {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "appendToSequence",
            aliases: &["append"],
            description: "Copy the trailing list and append the leading arguments to it",
            usage: "appendToSequence(values..., base)",
            args: &APPEND_ARGS,
            returns: "List",
            examples: &APPEND_EXAMPLES,
            category: "collections/sequence",
            related: &APPEND_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        let (base, values) = args
            .split_last()
            .ok_or_else(|| ReformError::not_a_sequence("appendToSequence", None))?;

        let base = match base {
            Value::List(items) => items,
            other => {
                return Err(ReformError::not_a_sequence("appendToSequence", Some(other.type_name())))
            }
        };

        let mut result = Vec::with_capacity(base.len() + values.len());
        result.extend(base.iter().cloned());
        result.extend(values.iter().cloned());
        Ok(Value::List(result))
    }
}

//! Terminal carrier stages: extractArguments, discard

use reform_plugin::prelude::*;
use crate::helpers::require_pack;

// ============ ExtractArguments ============

pub struct ExtractArguments;

static EXTRACT_ARGS: [ArgMeta; 1] = [ArgMeta {
    name: "carrier",
    typ: "Pack",
    description: "Pipe input produced by attach",
    optional: false,
    default: None,
}];

static EXTRACT_EXAMPLES: [&str; 1] = [
    ". | attach \"a\" 1 | require \"a\" | extractArguments → {a: 1}",
];

static EXTRACT_RELATED: [&str; 2] = ["require", "discard"];

impl FunctionPlugin for ExtractArguments {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "extractArguments",
            aliases: &["args"],
            description: "Return the attached arguments as a Map, dropping the origin",
            usage: "extractArguments(carrier)",
            args: &EXTRACT_ARGS,
            returns: "Map",
            examples: &EXTRACT_EXAMPLES,
            category: "pack",
            related: &EXTRACT_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        if args.len() != 1 {
            return Err(ReformError::arg_count("extractArguments", 1, args.len()));
        }

        let pack = require_pack(&args[0], "extractArguments")?;
        Ok(Value::Map(pack.args().clone()))
    }
}

// ============ Discard ============

pub struct Discard;

static DISCARD_ARGS: [ArgMeta; 1] = [ArgMeta {
    name: "carrier",
    typ: "Pack",
    description: "Pack whose pipeline only ran for validation",
    optional: false,
    default: None,
}];

static DISCARD_EXAMPLES: [&str; 1] = [
    ". | require \"a\" | discard → null",
];

static DISCARD_RELATED: [&str; 1] = ["extractArguments"];

impl FunctionPlugin for Discard {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "discard",
            aliases: &["done"],
            description: "Consume a Pack and produce null",
            usage: "discard(carrier)",
            args: &DISCARD_ARGS,
            returns: "Null",
            examples: &DISCARD_EXAMPLES,
            category: "pack",
            related: &DISCARD_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        if args.len() != 1 {
            return Err(ReformError::arg_count("discard", 1, args.len()));
        }

        require_pack(&args[0], "discard")?;
        Ok(Value::Null)
    }
}

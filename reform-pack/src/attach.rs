//! attach: bind a named argument onto the pipe value

use reform_plugin::prelude::*;
use crate::helpers::require_name;

pub struct Attach;

static ATTACH_ARGS: [ArgMeta; 3] = [
    ArgMeta {
        name: "name",
        typ: "Text",
        description: "Argument name",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "value",
        typ: "Any",
        description: "Value bound to the name",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "previous",
        typ: "Any",
        description: "Pipe input; a Pack is extended, anything else becomes the origin",
        optional: false,
        default: None,
    },
];

static ATTACH_EXAMPLES: [&str; 2] = [
    ". | attach \"title\" \"Home\" → Pack{origin: ., args: {title: \"Home\"}}",
    ". | attach \"a\" 1 | attach \"b\" 2 → Pack{origin: ., args: {a: 1, b: 2}}",
];

static ATTACH_RELATED: [&str; 3] = ["require", "extractArguments", "discard"];

impl FunctionPlugin for Attach {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "attach",
            aliases: &["arg"],
            description: "Attach a named argument to the pipe value, keeping the original value as origin",
            usage: "attach(name, value, previous)",
            args: &ATTACH_ARGS,
            returns: "Pack",
            examples: &ATTACH_EXAMPLES,
            category: "pack",
            related: &ATTACH_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        if args.len() != 3 {
            return Err(ReformError::arg_count("attach", 3, args.len()));
        }

        let name = require_name(&args[0], "attach")?;
        let value = args[1].clone();

        let pack = match &args[2] {
            Value::Pack(previous) => previous.clone().with_arg(name, value),
            origin => Pack::wrap(origin.clone(), name, value),
        };

        Ok(Value::Pack(pack))
    }
}

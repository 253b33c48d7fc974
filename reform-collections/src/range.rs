//! Integer range builder: makeRange

use reform_plugin::prelude::*;
use crate::helpers::require_int;

pub struct MakeRange;

static MAKE_RANGE_ARGS: [ArgMeta; 3] = [
    ArgMeta {
        name: "start",
        typ: "Int",
        description: "First value; with a single argument this is the exclusive end and start is 0",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "end",
        typ: "Int",
        description: "Exclusive bound",
        optional: true,
        default: None,
    },
    ArgMeta {
        name: "step",
        typ: "Int",
        description: "Increment; defaults to 1 towards end, or -1 when end < start",
        optional: true,
        default: Some("±1"),
    },
];

static MAKE_RANGE_EXAMPLES: [&str; 4] = [
    "makeRange 5 → [0, 1, 2, 3, 4]",
    "makeRange 1 4 → [1, 2, 3]",
    "makeRange 10 1 -3 → [10, 7, 4]",
    "makeRange 1 10 -1 → [1]",
];

static MAKE_RANGE_RELATED: [&str; 1] = ["makeSequence"];

impl FunctionPlugin for MakeRange {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "makeRange",
            aliases: &["rng"],
            description: "Generate integers from start towards an exclusive end",
            usage: "makeRange(n) | makeRange(start, end, [step])",
            args: &MAKE_RANGE_ARGS,
            returns: "List<Int>",
            examples: &MAKE_RANGE_EXAMPLES,
            category: "collections/range",
            related: &MAKE_RANGE_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        if args.is_empty() || args.len() > 3 {
            return Err(ReformError::arg_count("makeRange", "1-3", args.len()));
        }

        let numbers = if args.len() == 1 {
            let n = require_int(&args[0], "makeRange", "n")?;
            if n <= 0 {
                Vec::new()
            } else {
                generate(0, n, 1)
            }
        } else {
            let start = require_int(&args[0], "makeRange", "start")?;
            let end = require_int(&args[1], "makeRange", "end")?;
            let step = match args.get(2) {
                Some(step) => require_int(step, "makeRange", "step")?,
                None if end >= start => 1,
                None => -1,
            };
            if step == 0 {
                return Err(ReformError::zero_step("makeRange"));
            }
            generate(start, end, step)
        };

        Ok(Value::List(numbers.into_iter().map(Value::Int).collect()))
    }
}

/// Bound test. Polarity follows the direction from start to end, so a step
/// pointing the other way leaves the range after the first move.
fn in_range(start: i64, end: i64, n: i64) -> bool {
    if start <= end {
        n >= start && n < end
    } else {
        n <= start && n > end
    }
}

fn generate(start: i64, end: i64, step: i64) -> Vec<i64> {
    let mut result = Vec::new();
    let mut current = start;
    while in_range(start, end, current) {
        result.push(current);
        // Overflow means the next value is past any representable bound
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    result
}

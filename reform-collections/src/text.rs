//! String split and join: splitString, joinStrings

use reform_plugin::prelude::*;
use crate::helpers::{require_text, require_text_list};

// ============ SplitString ============

pub struct SplitString;

static SPLIT_ARGS: [ArgMeta; 2] = [
    ArgMeta {
        name: "separator",
        typ: "Text",
        description: "Substring to split on; empty splits into characters",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "text",
        typ: "Text",
        description: "Pipe input to split",
        optional: false,
        default: None,
    },
];

static SPLIT_EXAMPLES: [&str; 2] = [
    "\"1,2,3\" | splitString \",\" → [\"1\", \"2\", \"3\"]",
    "\"abc\" | splitString \"\" → [\"a\", \"b\", \"c\"]",
];

static SPLIT_RELATED: [&str; 1] = ["joinStrings"];

impl FunctionPlugin for SplitString {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "splitString",
            aliases: &["split"],
            description: "Split text on every occurrence of the separator",
            usage: "splitString(separator, text)",
            args: &SPLIT_ARGS,
            returns: "List<Text>",
            examples: &SPLIT_EXAMPLES,
            category: "collections/text",
            related: &SPLIT_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        if args.len() != 2 {
            return Err(ReformError::arg_count("splitString", 2, args.len()));
        }

        let separator = require_text(&args[0], "splitString", "separator")?;
        let text = require_text(&args[1], "splitString", "text")?;

        Ok(Value::List(split(separator, text).into_iter().map(Value::Text).collect()))
    }
}

fn split(separator: &str, text: &str) -> Vec<String> {
    if separator.is_empty() {
        // str::split("") would add empty leading and trailing pieces
        text.chars().map(String::from).collect()
    } else {
        text.split(separator).map(str::to_string).collect()
    }
}

// ============ JoinStrings ============

pub struct JoinStrings;

static JOIN_ARGS: [ArgMeta; 2] = [
    ArgMeta {
        name: "separator",
        typ: "Text",
        description: "Inserted between elements",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "sequence",
        typ: "List<Text>",
        description: "Pipe input to join",
        optional: false,
        default: None,
    },
];

static JOIN_EXAMPLES: [&str; 1] = [
    "\"1,2,3\" | splitString \",\" | joinStrings \";\" → \"1;2;3\"",
];

static JOIN_RELATED: [&str; 1] = ["splitString"];

impl FunctionPlugin for JoinStrings {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "joinStrings",
            aliases: &["join"],
            description: "Join a list of texts with a separator",
            usage: "joinStrings(separator, sequence)",
            args: &JOIN_ARGS,
            returns: "Text",
            examples: &JOIN_EXAMPLES,
            category: "collections/text",
            related: &JOIN_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        if args.len() != 2 {
            return Err(ReformError::arg_count("joinStrings", 2, args.len()));
        }

        let separator = require_text(&args[0], "joinStrings", "separator")?;
        let parts = require_text_list(&args[1], "joinStrings", "sequence")?;

        Ok(Value::Text(parts.join(separator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(parts: &[&str]) -> Value {
        Value::List(parts.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn test_split() {
        let result = SplitString.call(&[Value::from(","), Value::from("1,2,3")]).unwrap();
        assert_eq!(result, texts(&["1", "2", "3"]));
    }

    #[test]
    fn test_split_keeps_empty_pieces() {
        let result = SplitString.call(&[Value::from(","), Value::from(",a,")]).unwrap();
        assert_eq!(result, texts(&["", "a", ""]));
    }

    #[test]
    fn test_split_empty_text() {
        let result = SplitString.call(&[Value::from(","), Value::from("")]).unwrap();
        assert_eq!(result, texts(&[""]));
    }

    #[test]
    fn test_split_empty_separator() {
        let result = SplitString.call(&[Value::from(""), Value::from("héj")]).unwrap();
        assert_eq!(result, texts(&["h", "é", "j"]));
    }

    #[test]
    fn test_split_multichar_separator() {
        let result = SplitString.call(&[Value::from("::"), Value::from("a::b")]).unwrap();
        assert_eq!(result, texts(&["a", "b"]));
    }

    #[test]
    fn test_split_rejects_non_text() {
        let err = SplitString.call(&[Value::from(","), Value::from(12)]).unwrap_err();
        assert!(err.is(ErrorKind::ArgType));
    }

    #[test]
    fn test_join() {
        let result = JoinStrings.call(&[Value::from(";"), texts(&["1", "2", "3"])]).unwrap();
        assert_eq!(result, Value::from("1;2;3"));
    }

    #[test]
    fn test_join_empty_list() {
        let result = JoinStrings.call(&[Value::from(","), texts(&[])]).unwrap();
        assert_eq!(result, Value::from(""));
    }

    #[test]
    fn test_join_rejects_non_text_elements() {
        let list = Value::List(vec![Value::from("a"), Value::from(1)]);
        let err = JoinStrings.call(&[Value::from(","), list]).unwrap_err();
        assert!(err.is(ErrorKind::ArgType));
    }

    #[test]
    fn test_split_then_join_round_trip() {
        let parts = SplitString.call(&[Value::from(","), Value::from("x,y,z")]).unwrap();
        let joined = JoinStrings.call(&[Value::from(","), parts]).unwrap();
        assert_eq!(joined, Value::from("x,y,z"));
    }
}

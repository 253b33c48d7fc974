//! Mapping builder: makeMapping

use reform_plugin::prelude::*;
use std::collections::HashMap;

pub struct MakeMapping;

static MAKE_MAPPING_ARGS: [ArgMeta; 2] = [
    ArgMeta {
        name: "pairs",
        typ: "(Text, Any)...",
        description: "Alternating keys and values",
        optional: false,
        default: None,
    },
    ArgMeta {
        name: "base",
        typ: "Map",
        description: "Pipe input to merge into (copied, not modified)",
        optional: true,
        default: None,
    },
];

static MAKE_MAPPING_EXAMPLES: [&str; 2] = [
    "makeMapping \"foo\" 1 \"bar\" 2 → {bar: 2, foo: 1}",
    "makeMapping \"foo\" 1 | makeMapping \"bar\" 2 → {bar: 2, foo: 1}",
];

static MAKE_MAPPING_RELATED: [&str; 1] = ["makeSequence"];

impl FunctionPlugin for MakeMapping {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "makeMapping",
            aliases: &["map"],
            description: "Build a Map from key/value pairs, merging into a trailing Map if present",
            usage: "makeMapping(key1, value1, ..., [base])",
            args: &MAKE_MAPPING_ARGS,
            returns: "Map",
            examples: &MAKE_MAPPING_EXAMPLES,
            category: "collections/mapping",
            related: &MAKE_MAPPING_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Result<Value, ReformError> {
        let (mut result, pairs) = match args.split_last() {
            Some((Value::Map(base), rest)) => (base.clone(), rest),
            _ => (HashMap::new(), args),
        };

        if pairs.len() < 2 {
            return Err(ReformError::arg_count("makeMapping", "at least 2", pairs.len())
                .with_suggestion("Usage: makeMapping key1 value1 key2 value2 ..."));
        }
        if pairs.len() % 2 != 0 {
            return Err(ReformError::odd_argument_count("makeMapping", pairs.len()));
        }

        for (i, pair) in pairs.chunks_exact(2).enumerate() {
            let key = match &pair[0] {
                Value::Text(k) => k.clone(),
                other => {
                    return Err(ReformError::non_string_key("makeMapping", i * 2, other.type_name()))
                }
            };
            result.insert(key, pair[1].clone());
        }

        Ok(Value::Map(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(entries: &[(&str, i64)]) -> Value {
        Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), Value::from(*v)))
                .collect(),
        )
    }

    #[test]
    fn test_make_mapping() {
        let result = MakeMapping
            .call(&[Value::from("foo"), Value::from(1), Value::from("bar"), Value::from(2)])
            .unwrap();
        assert_eq!(result, map_of(&[("foo", 1), ("bar", 2)]));
    }

    #[test]
    fn test_merge_into_base() {
        let base = MakeMapping.call(&[Value::from("foo"), Value::from(1)]).unwrap();
        let result = MakeMapping
            .call(&[Value::from("bar"), Value::from(2), base])
            .unwrap();
        assert_eq!(result, map_of(&[("foo", 1), ("bar", 2)]));
    }

    #[test]
    fn test_new_pairs_overwrite_base() {
        let base = map_of(&[("foo", 1)]);
        let result = MakeMapping
            .call(&[Value::from("foo"), Value::from(9), base.clone()])
            .unwrap();
        assert_eq!(result, map_of(&[("foo", 9)]));
        // Base left untouched
        assert_eq!(base, map_of(&[("foo", 1)]));
    }

    #[test]
    fn test_later_pairs_win() {
        let result = MakeMapping
            .call(&[Value::from("k"), Value::from(1), Value::from("k"), Value::from(2)])
            .unwrap();
        assert_eq!(result, map_of(&[("k", 2)]));
    }

    #[test]
    fn test_single_argument_fails() {
        let err = MakeMapping.call(&[Value::from("a")]).unwrap_err();
        assert!(err.is(ErrorKind::ArgCount));
    }

    #[test]
    fn test_base_alone_fails() {
        let err = MakeMapping.call(&[map_of(&[("a", 1)])]).unwrap_err();
        assert!(err.is(ErrorKind::ArgCount));
    }

    #[test]
    fn test_odd_count_fails() {
        let err = MakeMapping
            .call(&[Value::from("a"), Value::from(1), Value::from("b")])
            .unwrap_err();
        assert!(err.is(ErrorKind::OddArgumentCount));
    }

    #[test]
    fn test_non_string_key_fails() {
        let err = MakeMapping
            .call(&[Value::from("a"), Value::from(1), Value::from(2), Value::from(3)])
            .unwrap_err();
        assert!(err.is(ErrorKind::NonStringKey));
        assert!(err.message.contains("position 2"));
    }

    #[test]
    fn test_map_valued_pair_needs_explicit_base() {
        // A trailing Map is always taken as the base
        let inner = map_of(&[("x", 1)]);
        let err = MakeMapping.call(&[Value::from("nested"), inner.clone()]).unwrap_err();
        assert!(err.is(ErrorKind::ArgCount));

        let result = MakeMapping
            .call(&[Value::from("nested"), inner.clone(), Value::Map(HashMap::new())])
            .unwrap();
        assert_eq!(result.field("nested"), Some(inner));
    }
}

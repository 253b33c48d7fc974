//! Reform Collection Builders Plugin
//!
//! Sequence, mapping, range and string split/join functions that compose
//! under the trailing-argument pipe convention. Every builder returns a
//! fresh collection; inputs are copied, never modified.

mod helpers;
mod sequence;
mod mapping;
mod range;
mod text;

pub use sequence::{MakeSequence, AppendToSequence};
pub use mapping::MakeMapping;
pub use range::MakeRange;
pub use text::{SplitString, JoinStrings};

use reform_plugin::FunctionRegistry;

/// Load collection builders into registry
pub fn load_collection_library(registry: FunctionRegistry) -> FunctionRegistry {
    registry
        // Sequences
        .with_function(sequence::MakeSequence)
        .with_function(sequence::AppendToSequence)
        .with_function(range::MakeRange)

        // Mappings
        .with_function(mapping::MakeMapping)

        // Text
        .with_function(text::SplitString)
        .with_function(text::JoinStrings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reform_plugin::prelude::*;

    fn registry() -> FunctionRegistry {
        load_collection_library(FunctionRegistry::new())
    }

    #[test]
    fn test_all_names_and_aliases_registered() {
        let reg = registry();
        for name in [
            "makeSequence", "slice", "makeMapping", "map", "makeRange", "rng",
            "appendToSequence", "append", "splitString", "split", "joinStrings", "join",
        ] {
            assert!(reg.contains(name), "missing {}", name);
        }
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn test_range_piped_into_append() {
        let reg = registry();
        let r = reg.call_function("rng", &[Value::from(3)]).unwrap();
        let appended = reg
            .call_function("append", &[Value::from(3), Value::from(4), r])
            .unwrap();
        assert_eq!(appended.to_string(), "[0, 1, 2, 3, 4]");
    }

    #[test]
    fn test_chained_mapping() {
        let reg = registry();
        let m = reg.call_function("map", &[Value::from("foo"), Value::from(1)]).unwrap();
        let m = reg.call_function("map", &[Value::from("bar"), Value::from(2), m]).unwrap();
        assert_eq!(m.to_string(), "{bar: 2, foo: 1}");
    }

    #[test]
    fn test_split_join_pipe() {
        let reg = registry();
        let parts = reg
            .call_function("split", &[Value::from(","), Value::from("1,2,3")])
            .unwrap();
        let joined = reg.call_function("join", &[Value::from(";"), parts]).unwrap();
        assert_eq!(joined, Value::from("1;2;3"));
    }

    #[test]
    fn test_list_by_category() {
        let reg = registry();
        let all = reg.list_functions(Some("collections"));
        assert_eq!(all.as_list().unwrap().len(), 6);

        let ranges = reg.list_functions(Some("collections/range"));
        let ranges = ranges.as_list().unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].field("name"), Some(Value::from("makeRange")));

        assert_eq!(reg.list_functions(Some("coll")).as_list().unwrap().len(), 0);
    }

    #[test]
    fn test_errors_carry_function_name() {
        let reg = registry();
        let err = reg.call_function("append", &[]).unwrap_err();
        assert!(err.is(ErrorKind::NotASequence));
        assert_eq!(err.context.unwrap().function.as_deref(), Some("appendToSequence"));
    }
}

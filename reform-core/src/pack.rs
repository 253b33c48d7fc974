//! Argument carrier threaded through a pipe
//!
//! A `Pack` keeps the value the pipeline started from next to the named
//! arguments attached along the way. Updates are functional: attaching
//! produces a new `Pack` with the same origin.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    origin: Box<Value>,
    args: HashMap<String, Value>,
}

impl Pack {
    /// Wrap a plain value with its first argument
    pub fn wrap(origin: Value, name: impl Into<String>, value: Value) -> Self {
        let mut args = HashMap::new();
        args.insert(name.into(), value);
        Self {
            origin: Box::new(origin),
            args,
        }
    }

    /// Same origin, one more (or overwritten) argument
    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    pub fn origin(&self) -> &Value {
        &self.origin
    }

    pub fn args(&self) -> &HashMap<String, Value> {
        &self.args
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Bound argument names, sorted for stable diagnostics
    pub fn arg_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.args.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn into_parts(self) -> (Value, HashMap<String, Value>) {
        (*self.origin, self.args)
    }
}

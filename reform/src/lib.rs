//! Reform - pipe-friendly argument carriers and collection builders
//!
//! Registers the carrier protocol (`attach`, `require`, `extractArguments`,
//! `discard`) and the collection builders into one function table that a
//! template engine resolves pipe stages against.

mod pipeline;

pub use pipeline::{Pipeline, Source, Stage};
pub use reform_core::{ErrorContext, ErrorKind, Pack, ReformError, Value};
pub use reform_plugin::{EvalContext, FunctionRegistry, TraceStep};

use reform_collections::load_collection_library;
use reform_pack::load_pack_library;
use std::sync::Arc;

/// Load every Reform function into registry
pub fn load_standard_library(registry: FunctionRegistry) -> FunctionRegistry {
    load_collection_library(load_pack_library(registry))
}

/// Create registry with every Reform function
pub fn standard_registry() -> FunctionRegistry {
    load_standard_library(FunctionRegistry::new())
}

/// Function table plus per-evaluation contexts.
///
/// The same instance serves plain-text and markup hosts; escaping is the
/// host's concern.
pub struct Reform {
    registry: Arc<FunctionRegistry>,
}

impl Reform {
    pub fn new(registry: FunctionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn with_standard_library() -> Self {
        Self::new(standard_registry())
    }

    pub fn registry(&self) -> Arc<FunctionRegistry> {
        self.registry.clone()
    }

    /// Fresh context for one evaluation
    pub fn context(&self) -> EvalContext {
        EvalContext::new(self.registry.clone())
    }

    pub fn run(&self, pipeline: &Pipeline) -> Result<Value, ReformError> {
        pipeline.run(&mut self.context())
    }

    pub fn help(&self, name: Option<&str>) -> Result<Value, ReformError> {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    pub fn describe_json(&self) -> serde_json::Value {
        self.registry.describe_json()
    }
}

impl Default for Reform {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

/// Build a `Vec<Value>` from anything convertible into `Value`
#[macro_export]
macro_rules! values {
    () => { Vec::<$crate::Value>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}

/// Build a variable map for `EvalContext::with_variables`
#[macro_export]
macro_rules! vars {
    {} => { std::collections::HashMap::<String, $crate::Value>::new() };
    { $($key:ident : $value:expr),* $(,)? } => {{
        let mut map = std::collections::HashMap::new();
        $(
            map.insert(stringify!($key).to_string(), $crate::Value::from($value));
        )*
        map
    }};
}

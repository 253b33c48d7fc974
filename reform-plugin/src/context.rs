//! Evaluation Context

use crate::FunctionRegistry;
use reform_core::{ReformError, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Per-evaluation state: the shared function table, host variables and
/// an optional trace of executed stages.
pub struct EvalContext {
    pub variables: HashMap<String, Value>,
    pub registry: Arc<FunctionRegistry>,
    pub tracing: bool,
    pub trace: Vec<TraceStep>,
}

/// Single executed pipeline stage
#[derive(Debug, Clone)]
pub struct TraceStep {
    pub stage: usize,
    pub function: String,
    pub args: Vec<Value>,
    pub result: Value,
}

impl EvalContext {
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self {
            variables: HashMap::new(),
            registry,
            tracing: false,
            trace: Vec::new(),
        }
    }

    pub fn with_variables(mut self, vars: HashMap<String, Value>) -> Self {
        self.variables = vars;
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Resolve `name` or a dotted path such as `page.args.title`
    pub fn get_var(&self, name: &str) -> Option<Value> {
        let mut parts = name.split('.');
        let root = parts.next()?;
        let mut current = self.variables.get(root)?.clone();
        for part in parts {
            current = current.field(part)?;
        }
        Some(current)
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, ReformError> {
        self.registry.call_function(name, args)
    }

    pub fn record_trace(&mut self, stage: usize, function: String, args: Vec<Value>, result: Value) {
        if self.tracing {
            self.trace.push(TraceStep { stage, function, args, result });
        }
    }
}

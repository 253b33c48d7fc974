//! Programmatic pipelines
//!
//! Applies the trailing-argument convention: each stage is called with its
//! own arguments followed by the previous stage's result.

use reform_core::{ReformError, Value};
use reform_plugin::EvalContext;
use serde::{Deserialize, Serialize};

/// A single function call in a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub function: String,
    pub args: Vec<Value>,
}

impl Stage {
    pub fn new(function: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }
}

/// Where the pipe value comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Source {
    /// A plain starting value (a template's dot)
    Value(Value),
    /// A call that receives no pipe input
    Call(Stage),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    source: Source,
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn from_value(value: impl Into<Value>) -> Self {
        Self {
            source: Source::Value(value.into()),
            stages: Vec::new(),
        }
    }

    pub fn from_call(function: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            source: Source::Call(Stage::new(function, args)),
            stages: Vec::new(),
        }
    }

    /// Append a stage; it receives the running value as its last argument
    pub fn then(mut self, function: impl Into<String>, args: Vec<Value>) -> Self {
        self.stages.push(Stage::new(function, args));
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Evaluate left to right, stopping at the first failing stage
    pub fn run(&self, ctx: &mut EvalContext) -> Result<Value, ReformError> {
        let span = tracing::debug_span!("pipeline", stages = self.stages.len());
        let _enter = span.enter();

        let (mut current, offset) = match &self.source {
            Source::Value(value) => (value.clone(), 0),
            Source::Call(stage) => (apply(ctx, 0, stage, None)?, 1),
        };

        for (i, stage) in self.stages.iter().enumerate() {
            current = apply(ctx, i + offset, stage, Some(current))?;
        }

        Ok(current)
    }
}

fn apply(
    ctx: &mut EvalContext,
    index: usize,
    stage: &Stage,
    input: Option<Value>,
) -> Result<Value, ReformError> {
    let mut args = stage.args.clone();
    args.extend(input);

    tracing::trace!(stage = index, function = %stage.function, argc = args.len(), "running stage");

    match ctx.call(&stage.function, &args) {
        Ok(result) => {
            if ctx.tracing {
                ctx.record_trace(index, stage.function.clone(), args, result.clone());
            }
            Ok(result)
        }
        Err(err) => {
            tracing::debug!(stage = index, function = %stage.function, error = %err, "stage failed");
            Err(err.in_function(stage.function.as_str()).at_stage(index))
        }
    }
}

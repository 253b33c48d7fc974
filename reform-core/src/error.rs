//! Structured errors for pipeline functions
//!
//! Every function in a pipeline either produces a value or fails with a
//! `ReformError`. The host aborts the current pipeline and surfaces the
//! error; nothing in the library retries or swallows it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of failure (machine-readable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed call shape, e.g. `require` with too many arguments
    #[serde(rename = "FORMAT_ERROR")]
    Format,
    /// A carrier was expected but the pipe delivered a plain value
    #[serde(rename = "PROTOCOL_ERROR")]
    Protocol,
    #[serde(rename = "MISSING_ARGUMENT")]
    MissingArgument,
    #[serde(rename = "TYPE_MISMATCH")]
    TypeMismatch,
    #[serde(rename = "ARG_COUNT")]
    ArgCount,
    #[serde(rename = "ODD_ARGUMENT_COUNT")]
    OddArgumentCount,
    #[serde(rename = "NON_STRING_KEY")]
    NonStringKey,
    #[serde(rename = "NOT_A_SEQUENCE")]
    NotASequence,
    #[serde(rename = "ZERO_STEP")]
    ZeroStep,
    #[serde(rename = "ARG_TYPE")]
    ArgType,
    #[serde(rename = "UNDEFINED_FUNC")]
    UndefinedFunction,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Format => "FORMAT_ERROR",
            ErrorKind::Protocol => "PROTOCOL_ERROR",
            ErrorKind::MissingArgument => "MISSING_ARGUMENT",
            ErrorKind::TypeMismatch => "TYPE_MISMATCH",
            ErrorKind::ArgCount => "ARG_COUNT",
            ErrorKind::OddArgumentCount => "ODD_ARGUMENT_COUNT",
            ErrorKind::NonStringKey => "NON_STRING_KEY",
            ErrorKind::NotASequence => "NOT_A_SEQUENCE",
            ErrorKind::ZeroStep => "ZERO_STEP",
            ErrorKind::ArgType => "ARG_TYPE",
            ErrorKind::UndefinedFunction => "UNDEFINED_FUNC",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where in a pipeline an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Function that raised the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Zero-based stage index within the pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<usize>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Error raised by a pipeline function
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("[{kind}] {message}")]
pub struct ReformError {
    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl ReformError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: record the function that failed (first one wins)
    pub fn in_function(mut self, function: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        if ctx.function.is_none() {
            ctx.function = Some(function.into());
        }
        self
    }

    /// Builder: record the pipeline stage that failed
    pub fn at_stage(mut self, stage: usize) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.stage = Some(stage);
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    // ========== Carrier protocol ==========

    pub fn format(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format, format!("Invalid format: {}", details.into()))
    }

    pub fn protocol(func: &str) -> Self {
        Self::new(
            ErrorKind::Protocol,
            format!("{}() received a value not produced by attach", func),
        )
        .with_suggestion("Attach at least one argument with attach before this stage")
    }

    pub fn missing_argument(expected: &str, bound: &[&str]) -> Self {
        Self::new(
            ErrorKind::MissingArgument,
            format!(
                "Required argument not found. Expected: {}, bound: [{}]",
                expected,
                bound.join(", ")
            ),
        )
        .with_suggestion(format!("Attach '{}' before requiring it", expected))
    }

    pub fn type_mismatch(name: &str, expected: &str, actual: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "Unmatched type for '{}': expected {}, actual {}",
                name, expected, actual
            ),
        )
    }

    // ========== Builders and call shape ==========

    pub fn arg_count(func: &str, expected: impl fmt::Display, got: usize) -> Self {
        Self::new(
            ErrorKind::ArgCount,
            format!("{}() expects {} arguments, got {}", func, expected, got),
        )
        .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(
            ErrorKind::ArgType,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got),
        )
    }

    pub fn odd_argument_count(func: &str, got: usize) -> Self {
        Self::new(
            ErrorKind::OddArgumentCount,
            format!("{}() expects key1 value1 key2 value2 ..., got {} arguments", func, got),
        )
    }

    pub fn non_string_key(func: &str, position: usize, got: &str) -> Self {
        Self::new(
            ErrorKind::NonStringKey,
            format!("{}() key at position {} should be string, got {}", func, position, got),
        )
    }

    pub fn not_a_sequence(func: &str, got: Option<&str>) -> Self {
        let message = match got {
            Some(type_name) => format!("{}() last argument must be a list, got {}", func, type_name),
            None => format!("{}() received no arguments", func),
        };
        Self::new(ErrorKind::NotASequence, message)
    }

    pub fn zero_step(func: &str) -> Self {
        Self::new(ErrorKind::ZeroStep, format!("{}() step=0 is illegal", func))
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(ErrorKind::UndefinedFunction, format!("Unknown function: {}", name))
    }
}

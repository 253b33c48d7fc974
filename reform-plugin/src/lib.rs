//! Reform Plugin System
//!
//! Provides the trait every pipe function implements, the metadata used for
//! help output, and the registry a host resolves function names against.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::FunctionRegistry;
pub use context::{EvalContext, TraceStep};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta,
        FunctionRegistry, EvalContext, TraceStep,
    };
    pub use reform_core::prelude::*;
}

//! Reform Core - Fundamental types
//!
//! This crate provides the core types used throughout Reform:
//! - `Value`: Runtime values flowing through a pipe
//! - `Pack`: The argument carrier built up by `attach`
//! - `ReformError`: Structured, inspectable errors

mod value;
mod pack;
mod error;

pub use value::Value;
pub use pack::Pack;
pub use error::{ReformError, ErrorKind, ErrorContext};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, Pack, ReformError, ErrorKind};
}

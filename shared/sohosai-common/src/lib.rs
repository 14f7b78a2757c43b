//! Sohosai Common Library
//!
//! Shared domain primitives used by the delivery core and its callers.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

//! CVA Core Library
//!
//! Target resolution, external-process orchestration and file patching
//! for the `cva` project scaffolder.

pub mod error;
pub mod materialize;
pub mod process;
pub mod resolve;
pub mod tailwind;
pub mod templates;
pub mod validate;

pub use error::{CvaError, CvaResult};

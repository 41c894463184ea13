//! Format dispatch macros for command output
//!
//! The macros are defined in `crate::cli::format` and re-exported here for
//! convenient access from command modules.

pub use crate::output_by_format;
pub use crate::output_by_format_result;

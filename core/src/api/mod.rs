//! Public configuration surface of the guards.
//!
//! Thresholds live in [`ExecutionLimits`]; they can be built in code or
//! loaded from a TOML file:
//!
//! ```toml
//! max_function_recursion_level = 5
//! max_until_execution_unique = 50
//! max_executions_without_builtins = 200
//! max_executions = 250
//! ```

pub mod error;
pub mod options;

#[cfg(test)]
mod options_test;

pub use error::{ConfigError, ConfigResult};
pub use options::ExecutionLimits;

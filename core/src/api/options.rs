//! Configuration options for the execution budget.

use std::path::Path;

use serde::Deserialize;

use super::error::{ConfigError, ConfigResult};

/// Thresholds enforced by [`ExecutionBudget`](crate::ExecutionBudget).
///
/// These are read once when the budget is constructed and never mutated by
/// the guards.
///
/// # Example
///
/// ```
/// use inferguard_core::ExecutionLimits;
///
/// let limits = ExecutionLimits {
///     max_function_recursion_level: 3,
///     ..ExecutionLimits::default()
/// };
/// assert_eq!(limits.max_executions, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionLimits {
    /// Maximum recursion level at which a function may re-enter itself
    /// (directly or through other functions on the call path).
    ///
    /// Default: 5
    pub max_function_recursion_level: usize,

    /// Once more than this many distinct functions have been executed,
    /// executing an already-seen function again is refused.
    ///
    /// Default: 50
    pub max_until_execution_unique: usize,

    /// Maximum number of executions for code outside the builtin library.
    ///
    /// Default: 200
    pub max_executions_without_builtins: usize,

    /// Hard cap on executions for the whole run, builtins included.
    ///
    /// Default: 250
    pub max_executions: usize,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            max_function_recursion_level: 5,
            max_until_execution_unique: 50,
            max_executions_without_builtins: 200,
            max_executions: 250,
        }
    }
}

impl ExecutionLimits {
    /// Limits that never reject anything. Useful as a base for overriding a
    /// single threshold.
    ///
    /// ```
    /// use inferguard_core::ExecutionLimits;
    ///
    /// let limits = ExecutionLimits {
    ///     max_executions: 5,
    ///     ..ExecutionLimits::unlimited()
    /// };
    /// assert_eq!(limits.max_function_recursion_level, usize::MAX);
    /// ```
    pub fn unlimited() -> Self {
        Self {
            max_function_recursion_level: usize::MAX,
            max_until_execution_unique: usize::MAX,
            max_executions_without_builtins: usize::MAX,
            max_executions: usize::MAX,
        }
    }

    /// Parse limits from a TOML document.
    ///
    /// Missing keys keep their default value; unknown keys are an error.
    ///
    /// ```
    /// use inferguard_core::ExecutionLimits;
    ///
    /// let limits = ExecutionLimits::from_toml_str("max_executions = 1000").unwrap();
    /// assert_eq!(limits.max_executions, 1000);
    /// assert_eq!(limits.max_function_recursion_level, 5);
    /// ```
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let limits: Self = toml::from_str(source)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Read and parse limits from a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check that every threshold admits at least one execution.
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            (
                "max_function_recursion_level",
                self.max_function_recursion_level,
            ),
            ("max_until_execution_unique", self.max_until_execution_unique),
            (
                "max_executions_without_builtins",
                self.max_executions_without_builtins,
            ),
            ("max_executions", self.max_executions),
        ];

        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::InvalidLimit {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

//! Termination guards for symbolic evaluation during type/shape inference.
//!
//! The analysis engine evaluates statements and function executions of an
//! arbitrary (possibly self-recursive) program. Two guards keep that
//! evaluation finite:
//!
//! - [`StatementCycleGuard`]: short-circuits a statement that is re-entered
//!   while it is already being evaluated higher up the chain.
//! - [`ExecutionBudgetGuard`]: bounds recursion depth and total work of
//!   function executions through a run-wide [`ExecutionBudget`].
//!
//! Both guards report "gave up" as the default (empty) result of the wrapped
//! operation, never as an error.

pub mod api;
pub mod model;
pub mod recursion;

pub use api::{ConfigError, ConfigResult, ExecutionLimits};
pub use model::{ExecutionKind, GuardedExecution, GuardedStatement, Position};
pub use recursion::{
    BudgetSnapshot, ExecutionBudget, ExecutionBudgetGuard, Frame, Rejection, StatementCycleGuard,
    frames_equal,
};

//! inferguard - termination guards for symbolic type inference
//!
//! # Overview
//!
//! A type/shape inference engine that symbolically evaluates statements and
//! function calls will happily loop forever on code like
//!
//! ```text
//! def f(n):
//!     return f(n - 1) if n else []
//! ```
//!
//! inferguard provides two guards the engine wraps its evaluation functions
//! with:
//!
//! - [`StatementCycleGuard`] refuses to evaluate a statement that is already
//!   being evaluated further up the chain.
//! - [`ExecutionBudgetGuard`] enforces the run-wide [`ExecutionLimits`]
//!   (recursion level, distinct functions, total executions) through a shared
//!   [`ExecutionBudget`].
//!
//! A refused evaluation yields the wrapped operation's empty (`Default`)
//! result, so inference degrades instead of failing.
//!
//! # Quick Start
//!
//! ```
//! use inferguard::{
//!     ExecutionBudget, ExecutionBudgetGuard, ExecutionLimits, GuardedExecution,
//! };
//!
//! #[derive(Debug)]
//! struct Call(&'static str);
//!
//! impl GuardedExecution for Call {
//!     type Base = &'static str;
//!     type Scope = &'static str;
//!
//!     fn base(&self) -> &'static str {
//!         self.0
//!     }
//!
//!     fn owner_scope(&self) -> &'static str {
//!         "main"
//!     }
//! }
//!
//! type Eval = fn(&Engine<'_>, &Call, bool) -> Result<Vec<&'static str>, ()>;
//!
//! struct Engine<'b> {
//!     calls: ExecutionBudgetGuard<'b, Call, Eval>,
//! }
//!
//! // `f` calls itself unconditionally.
//! fn execute(engine: &Engine<'_>, call: &Call, _: bool) -> Result<Vec<&'static str>, ()> {
//!     let mut shapes = vec![call.0];
//!     shapes.extend(engine.calls.call(engine, &Call("f"), false)?);
//!     Ok(shapes)
//! }
//!
//! let budget = ExecutionBudget::new(ExecutionLimits::default());
//! let engine = Engine {
//!     calls: ExecutionBudgetGuard::new(&budget, "builtins", execute as Eval),
//! };
//!
//! let shapes = engine.calls.call(&engine, &Call("f"), false).unwrap();
//! assert_eq!(shapes.len(), 5);
//! ```

// Re-export public API from inferguard_core
pub use inferguard_core::api::{ConfigError, ConfigResult, ExecutionLimits};

// Re-export the engine-facing model and the guards
pub use inferguard_core::model::{ExecutionKind, GuardedExecution, GuardedStatement, Position};
pub use inferguard_core::recursion::{
    self, BudgetSnapshot, ExecutionBudget, ExecutionBudgetGuard, Frame, Rejection,
    StatementCycleGuard, frames_equal,
};

//! Recursion guards for symbolic evaluation.
//!
//! The evaluator composes the two guards; they never call each other:
//!
//! ```text
//! evaluate statement ──► StatementCycleGuard ──► statement evaluator
//!                                                      │ function call
//!                                                      ▼
//!        nested statements ◄── execution evaluator ◄── ExecutionBudgetGuard
//! ```
//!
//! ## Design Principles
//!
//! - **Always terminate**: every refusal is an empty result, never an error,
//!   so adversarial input degrades inference instead of aborting it
//! - **Scoped bookkeeping**: frames and call-path entries are released by
//!   `Drop`, so errors and panics in the wrapped operation leave no residue
//! - **Explicit state**: the run-wide budget is a value the caller owns and
//!   resets, not a global

mod execution;
mod frame;
mod statement;

#[cfg(test)]
mod frame_test;
#[cfg(test)]
mod test_support;

pub use execution::{BudgetSnapshot, ExecutionBudget, ExecutionBudgetGuard, Rejection};
pub use frame::{Ancestors, Frame, frames_equal};
pub use statement::StatementCycleGuard;

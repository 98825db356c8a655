//! Interface the analysis engine implements for the guards.
//!
//! The guards never look inside statements or executions. They only need a
//! handful of facts about them: which top-level scope owns them, where they
//! sit in the source, and (for executions) which callable they run.

use core::fmt;
use core::hash::Hash;

/// Source location of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A statement evaluated through a [`StatementCycleGuard`](crate::StatementCycleGuard).
///
/// Implementations are expected to be cheap handles (references, ids, `Rc`s);
/// the guard clones one into every frame it creates.
pub trait GuardedStatement: Clone + fmt::Debug {
    /// Identity of a top-level module or unit.
    type Scope: Clone + PartialEq + fmt::Debug;

    /// The top-level scope that contains this statement.
    fn owner_scope(&self) -> Self::Scope;

    /// Where the statement starts.
    fn position(&self) -> Position;

    /// Whether this statement binds a function parameter.
    ///
    /// Parameter bindings never cause recursion on their own and are ignored
    /// by cycle detection.
    fn is_param(&self) -> bool {
        false
    }
}

/// What an execution ultimately runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionKind {
    /// A user-visible function, method or class body.
    Function,
    /// A generator/iterator protocol step.
    Generator,
    /// An array-like container construction.
    Array,
}

impl ExecutionKind {
    /// Generator and array executions are cheap and bounded elsewhere, so the
    /// budget only applies its hard cap to them.
    pub fn is_exempt(self) -> bool {
        matches!(self, ExecutionKind::Generator | ExecutionKind::Array)
    }
}

/// A function execution evaluated through an [`ExecutionBudgetGuard`](crate::ExecutionBudgetGuard).
pub trait GuardedExecution: fmt::Debug {
    /// Identity of the callable being executed. Used to detect re-entry and
    /// to count distinct callables.
    type Base: Clone + Eq + Hash + fmt::Debug;

    /// Identity of a top-level module or unit.
    type Scope: PartialEq;

    fn base(&self) -> Self::Base;

    fn kind(&self) -> ExecutionKind {
        ExecutionKind::Function
    }

    /// The top-level scope that contains the executed callable.
    fn owner_scope(&self) -> Self::Scope;
}

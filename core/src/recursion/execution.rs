//! Run-wide work budget for function executions.

use core::cell::RefCell;
use core::fmt;
use core::marker::PhantomData;

use hashbrown::HashSet;

use crate::api::ExecutionLimits;
use crate::model::GuardedExecution;

/// Why an execution attempt was refused.
///
/// Callers never see this: a refused attempt is just an empty result. It is
/// reported through `tracing` to explain where inference gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// More than `max_executions` attempts in this run.
    TotalBudget,
    /// The callable is already on the call path and the recursion level is
    /// above `max_function_recursion_level`.
    RecursionDepth,
    /// The callable was executed before and more than
    /// `max_until_execution_unique` distinct callables have been executed.
    UniqueBudget,
    /// More than `max_executions_without_builtins` attempts in this run.
    BudgetWithoutBuiltins,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TotalBudget => write!(f, "total execution budget exhausted"),
            Rejection::RecursionDepth => write!(f, "function recursion level exceeded"),
            Rejection::UniqueBudget => write!(f, "too many distinct functions executed"),
            Rejection::BudgetWithoutBuiltins => {
                write!(f, "execution budget outside builtins exhausted")
            }
        }
    }
}

/// Counters of an [`ExecutionBudget`] at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetSnapshot {
    pub recursion_level: usize,
    pub active_depth: usize,
    pub unique_bases: usize,
    pub total_count: usize,
}

struct BudgetState<B> {
    recursion_level: usize,
    active_chain: Vec<B>,
    seen_bases: HashSet<B>,
    total_count: usize,
}

impl<B> Default for BudgetState<B> {
    fn default() -> Self {
        Self {
            recursion_level: 0,
            active_chain: Vec::new(),
            seen_bases: HashSet::new(),
            total_count: 0,
        }
    }
}

/// Shared execution counters for one analysis run.
///
/// Build one per run and hand a reference to every [`ExecutionBudgetGuard`]
/// of that run. Call [`reset`](Self::reset) (or build a new budget) before
/// starting an unrelated run.
///
/// The budget is `!Sync`; its invariants rely on a single thread of
/// analysis.
pub struct ExecutionBudget<B> {
    limits: ExecutionLimits,
    state: RefCell<BudgetState<B>>,
}

impl<B: Clone + Eq + core::hash::Hash + fmt::Debug> ExecutionBudget<B> {
    pub fn new(limits: ExecutionLimits) -> Self {
        Self {
            limits,
            state: RefCell::new(BudgetState::default()),
        }
    }

    pub fn limits(&self) -> &ExecutionLimits {
        &self.limits
    }

    pub fn snapshot(&self) -> BudgetSnapshot {
        let state = self.state.borrow();
        BudgetSnapshot {
            recursion_level: state.recursion_level,
            active_depth: state.active_chain.len(),
            unique_bases: state.seen_bases.len(),
            total_count: state.total_count,
        }
    }

    /// Whether `base` is currently being executed somewhere on the call path.
    pub fn is_active(&self, base: &B) -> bool {
        self.state.borrow().active_chain.contains(base)
    }

    /// Clear every counter, as if the budget had just been built.
    pub fn reset(&self) {
        *self.state.borrow_mut() = BudgetState::default();
    }

    /// Record an execution attempt and decide whether it may proceed.
    ///
    /// The attempt is counted even when refused. The returned token undoes
    /// the call-path bookkeeping when dropped.
    fn enter<X>(
        &self,
        execution: &X,
        builtin_scope: &X::Scope,
        treat_as_generator: bool,
    ) -> (ActiveExecution<'_, B>, Option<Rejection>)
    where
        X: GuardedExecution<Base = B>,
    {
        let base = execution.base();
        let exempt_kind = execution.kind().is_exempt();
        let in_builtins = execution.owner_scope() == *builtin_scope;

        let mut state = self.state.borrow_mut();
        let reentrant = state.active_chain.contains(&base);
        let seen_before = state.seen_bases.contains(&base);

        state.recursion_level += 1;
        state.total_count += 1;
        state.seen_bases.insert(base.clone());
        state.active_chain.push(base);

        tracing::debug!(
            execution = ?execution,
            recursion_level = state.recursion_level,
            total_count = state.total_count,
            unique_bases = state.seen_bases.len(),
            "execution attempt"
        );

        let limits = &self.limits;
        let rejection = if state.total_count > limits.max_executions {
            Some(Rejection::TotalBudget)
        } else if exempt_kind || in_builtins || treat_as_generator {
            None
        } else if reentrant && state.recursion_level > limits.max_function_recursion_level {
            Some(Rejection::RecursionDepth)
        } else if seen_before && state.seen_bases.len() > limits.max_until_execution_unique {
            Some(Rejection::UniqueBudget)
        } else if state.total_count > limits.max_executions_without_builtins {
            Some(Rejection::BudgetWithoutBuiltins)
        } else {
            None
        };

        (ActiveExecution { state: &self.state }, rejection)
    }
}

/// Pops the call path when dropped.
struct ActiveExecution<'b, B> {
    state: &'b RefCell<BudgetState<B>>,
}

impl<B> Drop for ActiveExecution<'_, B> {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        // A reset during the execution leaves nothing to pop.
        state.active_chain.pop();
        state.recursion_level = state.recursion_level.saturating_sub(1);
    }
}

/// Wraps a function-execution evaluation with the limits of a shared
/// [`ExecutionBudget`].
///
/// A refused execution returns `R::default()` without calling the wrapped
/// operation.
pub struct ExecutionBudgetGuard<'b, X: GuardedExecution, F> {
    eval: F,
    builtin_scope: X::Scope,
    budget: &'b ExecutionBudget<X::Base>,
    _execution: PhantomData<fn(&X)>,
}

impl<'b, X: GuardedExecution, F> ExecutionBudgetGuard<'b, X, F> {
    /// Wrap `eval`. Executions owned by `builtin_scope` are only subject to
    /// the hard `max_executions` cap.
    pub fn new(budget: &'b ExecutionBudget<X::Base>, builtin_scope: X::Scope, eval: F) -> Self {
        Self {
            eval,
            builtin_scope,
            budget,
            _execution: PhantomData,
        }
    }

    /// Evaluate `execution` if the budget allows it.
    ///
    /// `treat_as_generator` marks a generator/iterator protocol step, which is
    /// exempt from every limit but the hard cap. Errors from the wrapped
    /// operation are returned unchanged.
    pub fn call<C, R, E>(&self, cx: &C, execution: &X, treat_as_generator: bool) -> Result<R, E>
    where
        C: ?Sized,
        R: Default,
        F: Fn(&C, &X, bool) -> Result<R, E>,
    {
        let (_active, rejection) =
            self.budget
                .enter(execution, &self.builtin_scope, treat_as_generator);

        if let Some(reason) = rejection {
            tracing::debug!(execution = ?execution, %reason, "execution refused");
            return Ok(R::default());
        }
        (self.eval)(cx, execution, treat_as_generator)
    }

    pub fn budget(&self) -> &'b ExecutionBudget<X::Base> {
        self.budget
    }

    /// Reset the shared budget. This affects every guard using it.
    pub fn reset(&self) {
        self.budget.reset();
    }
}

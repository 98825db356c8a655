//! Cycle detection for statement evaluation.

use core::cell::RefCell;
use std::rc::Rc;

use crate::model::GuardedStatement;

use super::frame::{Frame, frames_equal};

type Chain<St> = RefCell<Option<Rc<Frame<St>>>>;

/// Wraps a statement evaluation and refuses to re-enter a statement that is
/// already being evaluated further up the chain.
///
/// The chain belongs to the guard, not to any single call: every call through
/// the same guard sees the frames pushed by the calls enclosing it. Guards
/// wrapping different operations keep independent chains.
///
/// A refused evaluation returns `R::default()` without calling the wrapped
/// operation.
pub struct StatementCycleGuard<St: GuardedStatement, F> {
    eval: F,
    builtin_scope: St::Scope,
    current: Chain<St>,
}

impl<St: GuardedStatement, F> StatementCycleGuard<St, F> {
    /// Wrap `eval`. Statements owned by `builtin_scope` never count as cycles.
    pub fn new(builtin_scope: St::Scope, eval: F) -> Self {
        Self {
            eval,
            builtin_scope,
            current: RefCell::new(None),
        }
    }

    /// Evaluate `statement` unless doing so would re-enter an active
    /// evaluation of the same statement.
    ///
    /// Errors from the wrapped operation are returned unchanged. The frame
    /// pushed for this call is removed on every exit path, unwinding included.
    pub fn call<C, R, E>(&self, cx: &C, statement: &St) -> Result<R, E>
    where
        C: ?Sized,
        R: Default,
        F: Fn(&C, &St) -> Result<R, E>,
    {
        let Some(_frame) = self.push(statement) else {
            return Ok(R::default());
        };
        (self.eval)(cx, statement)
    }

    fn push(&self, statement: &St) -> Option<LinkedFrame<'_, St>> {
        let parent = self.current.borrow().clone();
        let frame = Frame::new(statement.clone(), &self.builtin_scope, parent);

        if frame.ancestors().any(|ancestor| frames_equal(ancestor, &frame)) {
            tracing::warn!(
                statement = ?statement,
                position = %frame.position(),
                "caught statement recursion"
            );
            return None;
        }

        *self.current.borrow_mut() = Some(Rc::new(frame));
        Some(LinkedFrame {
            current: &self.current,
        })
    }

    /// Statements on the active chain, outermost first.
    pub fn active_statements(&self) -> Vec<St> {
        let current = self.current.borrow();
        let Some(innermost) = current.as_deref() else {
            return Vec::new();
        };
        let mut statements: Vec<St> = core::iter::once(innermost)
            .chain(innermost.ancestors())
            .map(|frame| frame.statement().clone())
            .collect();
        statements.reverse();
        statements
    }

    /// Number of frames on the active chain.
    pub fn depth(&self) -> usize {
        self.current
            .borrow()
            .as_deref()
            .map_or(0, |innermost| 1 + innermost.ancestors().count())
    }

    /// Drop the whole chain.
    pub fn reset(&self) {
        self.current.borrow_mut().take();
    }
}

/// Unlinks the innermost frame when dropped.
struct LinkedFrame<'g, St: GuardedStatement> {
    current: &'g Chain<St>,
}

impl<St: GuardedStatement> Drop for LinkedFrame<'_, St> {
    fn drop(&mut self) {
        let mut current = self.current.borrow_mut();
        // Empty if the guard was reset while this frame was active.
        if let Some(frame) = current.take() {
            *current = frame.parent().cloned();
        }
    }
}

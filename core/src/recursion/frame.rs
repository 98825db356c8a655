//! Frames of the statement evaluation chain.

use core::fmt;
use std::rc::Rc;

use crate::model::{GuardedStatement, Position};

/// One in-flight statement evaluation, linked to the frame that was current
/// when it started.
///
/// Frames are immutable once built. A chain is only ever shortened by moving
/// the owning guard's `current` pointer back to a parent.
pub struct Frame<St: GuardedStatement> {
    statement: St,
    owner_scope: St::Scope,
    position: Position,
    ignored: bool,
    parent: Option<Rc<Frame<St>>>,
}

impl<St: GuardedStatement> Frame<St> {
    /// Build a frame for `statement` on top of `parent`.
    ///
    /// The frame is ignored by cycle detection when the statement is a
    /// parameter binding or lives in `builtin_scope`.
    pub fn new(statement: St, builtin_scope: &St::Scope, parent: Option<Rc<Frame<St>>>) -> Self {
        let owner_scope = statement.owner_scope();
        let ignored = statement.is_param() || owner_scope == *builtin_scope;
        Self {
            position: statement.position(),
            statement,
            owner_scope,
            ignored,
            parent,
        }
    }

    pub fn statement(&self) -> &St {
        &self.statement
    }

    pub fn owner_scope(&self) -> &St::Scope {
        &self.owner_scope
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn parent(&self) -> Option<&Rc<Frame<St>>> {
        self.parent.as_ref()
    }

    /// Iterate over the enclosing frames, innermost first. The frame itself
    /// is not included.
    pub fn ancestors(&self) -> Ancestors<'_, St> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }
}

impl<St: GuardedStatement> fmt::Debug for Frame<St> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("statement", &self.statement)
            .field("owner_scope", &self.owner_scope)
            .field("position", &self.position)
            .field("ignored", &self.ignored)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Iterator over the ancestors of a [`Frame`].
pub struct Ancestors<'a, St: GuardedStatement> {
    next: Option<&'a Frame<St>>,
}

impl<'a, St: GuardedStatement> Iterator for Ancestors<'a, St> {
    type Item = &'a Frame<St>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.parent.as_deref();
        Some(frame)
    }
}

/// Whether two frames denote the same statement for cycle detection.
///
/// Frames are equal when they share owner scope and position and neither is
/// ignored. An ignored frame is not even equal to itself.
pub fn frames_equal<St: GuardedStatement>(a: &Frame<St>, b: &Frame<St>) -> bool {
    !a.ignored && !b.ignored && a.position == b.position && a.owner_scope == b.owner_scope
}

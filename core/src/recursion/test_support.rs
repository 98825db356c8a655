//! Minimal statement and execution models shared by the unit tests.

use crate::model::{ExecutionKind, GuardedExecution, GuardedStatement, Position};

pub const BUILTINS: &str = "builtins";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stmt {
    pub module: &'static str,
    pub line: usize,
    pub column: usize,
    pub param: bool,
}

impl Stmt {
    pub fn at(module: &'static str, line: usize, column: usize) -> Self {
        Self {
            module,
            line,
            column,
            param: false,
        }
    }

    pub fn param(module: &'static str, line: usize, column: usize) -> Self {
        Self {
            param: true,
            ..Self::at(module, line, column)
        }
    }
}

impl GuardedStatement for Stmt {
    type Scope = &'static str;

    fn owner_scope(&self) -> Self::Scope {
        self.module
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn is_param(&self) -> bool {
        self.param
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exec {
    pub function: &'static str,
    pub module: &'static str,
    pub kind: ExecutionKind,
}

impl Exec {
    pub fn of(function: &'static str) -> Self {
        Self {
            function,
            module: "main",
            kind: ExecutionKind::Function,
        }
    }

    pub fn builtin(function: &'static str) -> Self {
        Self {
            module: BUILTINS,
            ..Self::of(function)
        }
    }

    pub fn with_kind(function: &'static str, kind: ExecutionKind) -> Self {
        Self {
            kind,
            ..Self::of(function)
        }
    }
}

impl GuardedExecution for Exec {
    type Base = &'static str;
    type Scope = &'static str;

    fn base(&self) -> Self::Base {
        self.function
    }

    fn kind(&self) -> ExecutionKind {
        self.kind
    }

    fn owner_scope(&self) -> Self::Scope {
        self.module
    }
}

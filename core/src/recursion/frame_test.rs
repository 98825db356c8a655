use std::rc::Rc;

use super::frame::{Frame, frames_equal};
use super::test_support::{BUILTINS, Stmt};

fn frame(stmt: Stmt) -> Frame<Stmt> {
    Frame::new(stmt, &BUILTINS, None)
}

#[test]
fn test_same_scope_and_position_are_equal() {
    let a = frame(Stmt::at("main", 3, 4));
    let b = frame(Stmt::at("main", 3, 4));
    assert!(frames_equal(&a, &b));
    assert!(frames_equal(&b, &a));
}

#[test]
fn test_different_position_or_scope_are_not_equal() {
    let base = frame(Stmt::at("main", 3, 4));
    assert!(!frames_equal(&base, &frame(Stmt::at("main", 3, 5))));
    assert!(!frames_equal(&base, &frame(Stmt::at("main", 4, 4))));
    assert!(!frames_equal(&base, &frame(Stmt::at("other", 3, 4))));
}

#[test]
fn test_param_frame_is_ignored_and_never_equal() {
    let param = frame(Stmt::param("main", 1, 8));
    assert!(param.is_ignored());
    assert!(!frames_equal(&param, &param));
    assert!(!frames_equal(&param, &frame(Stmt::at("main", 1, 8))));
}

#[test]
fn test_builtin_frame_is_ignored() {
    let builtin = frame(Stmt::at(BUILTINS, 10, 0));
    assert!(builtin.is_ignored());
    assert!(!frames_equal(&builtin, &frame(Stmt::at(BUILTINS, 10, 0))));

    let user = frame(Stmt::at("main", 10, 0));
    assert!(!user.is_ignored());
}

#[test]
fn test_ancestors_walk_innermost_first() {
    let outer = Rc::new(frame(Stmt::at("main", 1, 0)));
    let middle = Rc::new(Frame::new(
        Stmt::at("main", 2, 0),
        &BUILTINS,
        Some(outer.clone()),
    ));
    let inner = Frame::new(Stmt::at("main", 3, 0), &BUILTINS, Some(middle.clone()));

    let lines: Vec<usize> = inner.ancestors().map(|f| f.position().line).collect();
    assert_eq!(lines, vec![2, 1]);
    assert_eq!(outer.ancestors().count(), 0);
    assert!(Rc::ptr_eq(inner.parent().unwrap(), &middle));
}

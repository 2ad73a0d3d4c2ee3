#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn define_and_get() {
    let env = Environment::new();
    env.define("x", Some(Value::Number(1.0)));
    assert_eq!(env.get("x"), Ok(Value::Number(1.0)));
    assert_eq!(env.get("y"), Err(LookupError::Undefined));
}

#[test]
fn uninitialized_is_not_nil() {
    let env = Environment::new();
    env.define("x", None);
    assert_eq!(env.get("x"), Err(LookupError::Uninitialized));

    env.assign("x", Value::Nil).unwrap();
    assert_eq!(env.get("x"), Ok(Value::Nil));
}

#[test]
fn lookup_walks_outward() {
    let globals = Environment::new();
    globals.define("a", Some(Value::string("outer")));
    let block = globals.child().child();
    assert_eq!(block.get("a"), Ok(Value::string("outer")));
    assert!(!block.contains("a"));
}

#[test]
fn inner_definition_shadows_outer() {
    let globals = Environment::new();
    globals.define("a", Some(Value::Number(1.0)));
    let block = globals.child();
    block.define("a", Some(Value::Number(2.0)));

    assert_eq!(block.get("a"), Ok(Value::Number(2.0)));
    assert_eq!(globals.get("a"), Ok(Value::Number(1.0)));
}

#[test]
fn nearest_uninitialized_declaration_wins() {
    let globals = Environment::new();
    globals.define("a", Some(Value::Number(1.0)));
    let block = globals.child();
    block.define("a", None);
    assert_eq!(block.get("a"), Err(LookupError::Uninitialized));
}

#[test]
fn assign_updates_nearest_frame() {
    let globals = Environment::new();
    globals.define("a", Some(Value::Number(1.0)));
    let block = globals.child();

    block.assign("a", Value::Number(5.0)).unwrap();
    assert_eq!(globals.get("a"), Ok(Value::Number(5.0)));
    assert!(block.is_empty());
}

#[test]
fn assign_never_creates_a_binding() {
    let env = Environment::new().child();
    assert_eq!(
        env.assign("ghost", Value::Bool(true)),
        Err(LookupError::Undefined)
    );
    assert!(env.is_empty());
    assert_eq!(env.parent().map(|p| p.is_empty()), Some(true));
}

#[test]
fn redefinition_overwrites() {
    let env = Environment::new();
    env.define("a", Some(Value::Number(1.0)));
    env.define("a", None);
    assert_eq!(env.get("a"), Err(LookupError::Uninitialized));
}

#[test]
fn clones_share_the_frame() {
    let env = Environment::new();
    let alias = env.clone();
    alias.define("shared", Some(Value::Bool(true)));
    assert!(env.contains("shared"));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&env.child()));
}

#[test]
fn dump_is_sorted() {
    let env = Environment::new();
    env.define("zeta", Some(Value::string("z")));
    env.define("alpha", Some(Value::Number(1.5)));
    env.define("mid", None);
    assert_eq!(env.dump(), "alpha = 1.5\nmid = <uninitialized>\nzeta = z");
}

#[test]
fn dump_of_empty_frame() {
    let env = Environment::new();
    env.define("outer", Some(Value::Nil));
    assert_eq!(env.child().dump(), "[Empty Environment]");
}

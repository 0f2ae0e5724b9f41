use super::*;
use pretty_assertions::assert_eq;
use smallvec::smallvec;

#[test]
fn test_globals_define_and_rebind() {
    let mut env = Environment::new();
    assert_eq!(env.len(), 0);
    env.define("x", Value::int(1));
    env.define("x", Value::double(2.5));
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("x"), Some(&Value::double(2.5)));
    assert_eq!(env.scope().lookup("x"), Some(Value::double(2.5)));
    assert_eq!(env.scope().lookup("y"), None);
}

#[test]
fn test_lambda_scope_is_isolated() {
    let mut env = Environment::new();
    env.define("n", Value::int(10));
    let scope = Scope::Lambda(smallvec![("i", NumberValue::from_int(3))]);
    assert_eq!(scope.lookup("i"), Some(Value::int(3)));
    assert_eq!(scope.lookup("n"), None);
}

#[test]
fn test_later_lambda_binding_wins() {
    let scope = Scope::Lambda(smallvec![
        ("x", NumberValue::from_int(1)),
        ("x", NumberValue::from_int(2)),
    ]);
    assert_eq!(scope.lookup("x"), Some(Value::int(2)));

    let scope = Scope::Lambda(smallvec![
        ("acc", NumberValue::from_int(1)),
        ("e", NumberValue::from_int(2)),
    ]);
    assert_eq!(scope.lookup("acc"), Some(Value::int(1)));
    assert_eq!(scope.lookup("e"), Some(Value::int(2)));
}

use crate::autograd::Op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_operator_forms_agree() {
    let a = Value::new(6.0);
    let b = Value::new(1.5);

    assert_relative_eq!((&a + &b).data(), 7.5);
    assert_relative_eq!((a.clone() + b.clone()).data(), 7.5);
    assert_relative_eq!((a.clone() + &b).data(), 7.5);
    assert_relative_eq!((&a + b.clone()).data(), 7.5);

    assert_relative_eq!((&a - &b).data(), 4.5);
    assert_relative_eq!((&a * &b).data(), 9.0);
    assert_relative_eq!((&a / &b).data(), 4.0);
    assert_relative_eq!((-&a).data(), -6.0);
    assert_relative_eq!((-a.clone()).data(), -6.0);
}

#[test]
fn test_scalar_operands() {
    let a = Value::new(2.0);
    assert_relative_eq!((&a + 1.0).data(), 3.0);
    assert_relative_eq!((&a - 1.0).data(), 1.0);
    assert_relative_eq!((&a * 3.0).data(), 6.0);
    assert_relative_eq!((&a / 4.0).data(), 0.5);
    assert_relative_eq!((a.clone() * 3.0).data(), 6.0);
}

#[test]
fn test_reflected_scalar_operands() {
    let a = Value::new(2.0);
    assert_relative_eq!((1.0 + &a).data(), 3.0);
    assert_relative_eq!((1.0 - &a).data(), -1.0);
    assert_relative_eq!((3.0 * &a).data(), 6.0);
    assert_relative_eq!((4.0 / &a).data(), 2.0);
    assert_relative_eq!((4.0 / a.clone()).data(), 2.0);
}

#[test]
fn test_reflected_backward() {
    // y = 1 - a  =>  dy/da = -1
    let a = Value::new(2.0);
    let y = 1.0 - &a;
    y.backward();
    assert_relative_eq!(a.grad(), -1.0);

    // y = 4 / b  =>  dy/db = -4 / b^2
    let b = Value::new(2.0);
    let y = 4.0 / &b;
    y.backward();
    assert_relative_eq!(b.grad(), -1.0);
}

#[test]
fn test_derived_ops_route_through_primitives() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    assert_eq!((&a - &b).op(), Op::Add);
    assert_eq!((-&a).op(), Op::Mul);
    assert_eq!((&a / &b).op(), Op::Mul);
}

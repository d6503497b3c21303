use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), GradletError> {
    let a = Value::new(2.0);
    let out = a.pow(3)?;
    assert_relative_eq!(out.data(), 8.0);
    assert_eq!(out.op(), Op::Pow(3.0));
    assert_eq!(format!("{}", out.op()), "**3");
    Ok(())
}

#[test]
fn test_pow_backward_power_rule() -> Result<(), GradletError> {
    let a = Value::new(2.0);
    let out = a.pow(3.0)?;
    out.backward();
    // d/dx x^3 = 3x^2 = 12 at x=2
    assert_relative_eq!(a.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_rule_ignores_existing_gradient() -> Result<(), GradletError> {
    let a = Value::new(3.0);
    a.acc_grad(5.0);
    let out = a.pow(2)?;
    out.backward();
    // 5 (stale) + 2 * 3
    assert_relative_eq!(a.grad(), 11.0);
    Ok(())
}

#[test]
fn test_pow_fractional_and_negative_exponents() -> Result<(), GradletError> {
    let a = Value::new(4.0);
    let root = a.pow(0.5)?;
    assert_relative_eq!(root.data(), 2.0);
    root.backward();
    assert_relative_eq!(a.grad(), 0.25);

    let b = Value::new(2.0);
    let inv = b.pow(-1)?;
    assert_relative_eq!(inv.data(), 0.5);
    inv.backward();
    assert_relative_eq!(b.grad(), -0.25);
    Ok(())
}

#[test]
fn test_pow_invalid_exponent() {
    let a = Value::new(2.0);
    assert!(matches!(a.pow(f64::NAN), Err(GradletError::InvalidExponent(_))));
    assert!(matches!(a.pow(f64::INFINITY), Err(GradletError::InvalidExponent(_))));
    assert!(matches!(
        pow_op(&a, f64::NEG_INFINITY),
        Err(GradletError::InvalidExponent(_))
    ));
}

#[test]
fn test_pow_zero_base_negative_exponent_is_ieee() -> Result<(), GradletError> {
    let a = Value::new(0.0);
    let out = a.pow(-1)?;
    assert!(out.data().is_infinite());
    Ok(())
}

#[test]
fn test_pow_backward_grad_check() {
    let inputs = vec![Value::new(1.7)];
    let result = check_grad(|x: &[Value]| x[0].pow(2.5), &inputs, 1e-6, 1e-5);
    assert!(result.is_ok(), "Pow grad check failed: {:?}", result.err());
}

#[test]
fn test_pow_zero_exponent_has_zero_gradient() -> Result<(), GradletError> {
    for x in [0.0, -2.0, 3.5] {
        let a = Value::new(x);
        let out = a.pow(0)?;
        out.backward();
        assert_eq!(out.data(), 1.0);
        assert_eq!(a.grad(), 0.0, "x^0 at x = {}", x);
    }
    Ok(())
}

use super::*;
use crate::autograd::Op;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_neuron(activation: Activation) -> Result<Neuron, GradletError> {
    Neuron::from_parameters(
        vec![Value::new(0.5), Value::new(-2.0)],
        Value::new(1.0),
        activation,
    )
}

#[test]
fn test_neuron_new_parameters() -> Result<(), GradletError> {
    let mut rng = StdRng::seed_from_u64(1);
    let neuron = Neuron::with_rng(3, Activation::Relu, &mut rng)?;
    assert_eq!(neuron.nin(), 3);
    assert_eq!(neuron.num_parameters(), 4);
    assert_eq!(neuron.bias().data(), 0.0);
    for w in neuron.weights() {
        assert!((-1.0..=1.0).contains(&w.data()));
    }
    // Weights first, bias last.
    let params = neuron.parameters();
    assert!(params[3].ptr_eq(neuron.bias()));
    Ok(())
}

#[test]
fn test_neuron_forward_linear() -> Result<(), GradletError> {
    let neuron = fixed_neuron(Activation::Linear)?;
    let x = vec![Value::new(2.0), Value::new(3.0)];
    let out = neuron.call(&x)?;
    // 1 + 0.5*2 + (-2)*3 = -4
    assert_relative_eq!(out.data(), -4.0);
    assert_eq!(out.op(), Op::Add);
    Ok(())
}

#[test]
fn test_neuron_bias_is_first_operand() -> Result<(), GradletError> {
    let neuron = fixed_neuron(Activation::Linear)?;
    let out = neuron.call(&[Value::new(2.0), Value::new(3.0)])?;
    // ((b + w0x0) + w1x1): descend the left spine to reach the bias.
    let inner = out.operands()[0].clone();
    assert!(inner.operands()[0].ptr_eq(neuron.bias()));
    Ok(())
}

#[test]
fn test_neuron_relu_clamps() -> Result<(), GradletError> {
    let neuron = fixed_neuron(Activation::Relu)?;
    let out = neuron.call(&[Value::new(2.0), Value::new(3.0)])?;
    assert_eq!(out.op(), Op::Relu);
    assert_eq!(out.data(), 0.0);
    Ok(())
}

#[test]
fn test_neuron_sigmoid() -> Result<(), GradletError> {
    let neuron = fixed_neuron(Activation::Sigmoid)?;
    let out = neuron.call(&[Value::new(2.0), Value::new(3.0)])?;
    assert_relative_eq!(out.data(), 1.0 / (1.0 + 4.0f64.exp()), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_gradients() -> Result<(), GradletError> {
    let neuron = fixed_neuron(Activation::Linear)?;
    let x = vec![Value::new(2.0), Value::new(3.0)];
    neuron.call(&x)?.backward();
    assert_relative_eq!(neuron.weights()[0].grad(), 2.0);
    assert_relative_eq!(neuron.weights()[1].grad(), 3.0);
    assert_relative_eq!(neuron.bias().grad(), 1.0);
    assert_relative_eq!(x[0].grad(), 0.5);
    assert_relative_eq!(x[1].grad(), -2.0);
    Ok(())
}

#[test]
fn test_neuron_input_size_mismatch() -> Result<(), GradletError> {
    let neuron = fixed_neuron(Activation::Relu)?;
    let err = neuron.call(&[Value::new(1.0)]).unwrap_err();
    assert_eq!(
        err,
        GradletError::InputSizeMismatch {
            expected: 2,
            actual: 1,
            operation: "Neuron::call".to_string(),
        }
    );
    Ok(())
}

#[test]
fn test_neuron_zero_inputs_is_bias() -> Result<(), GradletError> {
    let mut rng = StdRng::seed_from_u64(5);
    let neuron = Neuron::with_rng(0, Activation::Linear, &mut rng)?;
    let out = neuron.call(&[])?;
    assert!(out.ptr_eq(neuron.bias()));
    Ok(())
}

#[test]
fn test_neuron_from_parameters_rejects_computed() {
    let a = Value::new(1.0);
    let computed = &a + 1.0;
    let res = Neuron::from_parameters(vec![computed], Value::new(0.0), Activation::Relu);
    assert_eq!(
        res.unwrap_err(),
        GradletError::InvalidArgument("neuron parameters must be leaves".to_string())
    );

    let bias = &a * 2.0;
    let res = Neuron::from_parameters(vec![Value::new(1.0)], bias, Activation::Relu);
    assert!(matches!(res, Err(GradletError::InvalidArgument(_))));
}

#[test]
fn test_neuron_named_parameters() -> Result<(), GradletError> {
    let neuron = fixed_neuron(Activation::Relu)?;
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight0", "weight1", "bias"]);
    Ok(())
}

#[test]
fn test_neuron_display() -> Result<(), GradletError> {
    assert_eq!(fixed_neuron(Activation::Relu)?.to_string(), "ReLU Neuron(2)");
    assert_eq!(fixed_neuron(Activation::Sigmoid)?.to_string(), "Sigmoid Neuron(2)");
    assert_eq!(fixed_neuron(Activation::Linear)?.to_string(), "Linear Neuron(2)");
    Ok(())
}

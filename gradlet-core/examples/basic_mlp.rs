//! # Training a tiny MLP with gradlet
//!
//! Fits a `2 -> 4 -> 4 -> 1` network on four points with plain gradient
//! descent:
//! 1. forward pass over every sample,
//! 2. MSE loss,
//! 3. backward pass,
//! 4. parameter update through `Value::set_data`,
//! 5. `zero_grad` before the next step.
//!
//! Run with `cargo run --example basic_mlp`.

use gradlet_core::nn::{Activation, Module, MseLoss, Reduction};
use gradlet_core::value::from_slice;
use gradlet_core::{GradletError, Mlp, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), GradletError> {
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::with_rng(2, &[4, 4, 1], Activation::Linear, &mut rng)?;
    println!("{}", mlp);
    println!("{} parameters", mlp.num_parameters());

    let xs = [[2.0, 3.0], [3.0, -1.0], [0.5, 1.0], [1.0, 1.0]];
    let ys = from_slice(&[1.0, -1.0, -1.0, 1.0]);
    let loss_fn = MseLoss::new(Reduction::Mean);
    let learning_rate = 0.01;

    for step in 0..50 {
        let preds = xs
            .iter()
            .map(|x| mlp.forward_scalar(&from_slice(x)))
            .collect::<Result<Vec<Value>, _>>()?;
        let loss = loss_fn.calculate(&preds, &ys)?;

        mlp.zero_grad();
        loss.backward();

        for p in mlp.parameters() {
            p.set_data(p.data() - learning_rate * p.grad())?;
        }

        if step % 10 == 0 {
            println!("step {:>2}: loss = {:.6}", step, loss.data());
        }
    }

    for (x, y) in xs.iter().zip(&ys) {
        let pred = mlp.forward_scalar(&from_slice(x))?;
        println!("{:?} -> {:+.4} (target {:+.1})", x, pred.data(), y.data());
    }
    Ok(())
}

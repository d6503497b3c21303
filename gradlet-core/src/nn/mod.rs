// src/nn/mod.rs
// Neural network building blocks on top of the scalar engine.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use layers::{Layer, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;

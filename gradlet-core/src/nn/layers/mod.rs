// src/nn/layers/mod.rs
// Neuron and fully connected layer.

pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use neuron::Neuron;

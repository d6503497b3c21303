// src/model/mod.rs
// Complete networks assembled from `nn` building blocks.

pub mod mlp;

pub use mlp::Mlp;

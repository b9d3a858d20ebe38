//! Adapters - Boundary code on top of the pure core

pub mod input;

#[cfg(feature = "python")]
pub mod python;

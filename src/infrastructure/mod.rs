//! Adapters implementing the domain ports.

pub mod in_memory;
pub mod legacy;
pub mod observers;
pub mod simulated;

//! Application layer: the coordinators that sequence collaborator calls.
//!
//! Every coordinator is written against the domain ports, so simulated,
//! adapted and proxied collaborators are interchangeable.

pub mod facade;
pub mod pricing;
pub mod processor;
pub mod proxy;
pub mod subject;
pub mod workflow;

#[cfg(test)]
pub(crate) mod stubs;

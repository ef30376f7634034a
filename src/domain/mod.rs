//! Domain layer: the order entity, its value objects and the ports that
//! coordinators depend on.

pub mod order;
pub mod ports;
pub mod receipt;
pub mod role;

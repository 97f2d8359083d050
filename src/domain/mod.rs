// Domain layer: record model, query policies, and the loader port.

pub mod model;
pub mod ports;

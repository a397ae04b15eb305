// Domain layer: record types and the container port. No I/O here.

pub mod model;
pub mod ports;

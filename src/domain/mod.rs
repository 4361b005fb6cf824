// Domain layer: course/department models and the ports the adapters implement.

pub mod model;
pub mod ports;

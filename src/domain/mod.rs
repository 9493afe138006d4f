// Domain layer: interface models and ports (traits). No I/O here.

pub mod model;
pub mod ports;

// Domain layer: the value type and its ports. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;

// Domain layer: value types and ports. No I/O; external dependencies limited
// to serde where a type crosses the wire.

pub mod model;
pub mod ports;

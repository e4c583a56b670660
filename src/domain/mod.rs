// Domain layer: line-scoped value types and the two ports (validators, report sinks).

pub mod model;
pub mod ports;

// Domain layer: entities and ports (capabilities). Depends on nothing but std/serde.

pub mod model;
pub mod ports;

// Domain layer: result models and the blacklist port. Depends only on std and serde.

pub mod model;
pub mod ports;

// Domain layer: item models and ports. No I/O here beyond the `Write` handed to `Pipeline::load`.

pub mod model;
pub mod ports;

// Domain layer: page model and ports. No HTTP or config knowledge here.

pub mod model;
pub mod ports;

// Domain layer: label models and the ports the page talks through.

pub mod model;
pub mod ports;

// Domain layer: cart snapshot, fragment values and the ports the host implements.

pub mod model;
pub mod ports;

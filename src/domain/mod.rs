// Domain layer: people, birthday groups and the ports the sequencers depend on.

pub mod model;
pub mod ports;

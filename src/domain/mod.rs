// Domain layer: the bike value, station policy types and the config port.

pub mod model;
pub mod ports;

// Domain layer: log model and the capability contract the binder fulfils.

pub mod model;
pub mod ports;

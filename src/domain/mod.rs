pub mod directory;
pub mod model;
pub mod ports;

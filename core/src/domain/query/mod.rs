pub mod binder;
pub mod builder;
pub mod coercion;
pub mod encoder;
pub mod entities;
pub mod keys;
pub mod parser;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

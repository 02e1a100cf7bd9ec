//! Drag decision engine: snapshot in, per-edge decision out.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;

pub mod config;
pub mod controller;

pub use config::*;
pub use controller::*;

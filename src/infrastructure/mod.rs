pub mod dom;
pub mod services;

pub use dom::DomSurface;

//! Scrollable space aggregate: layout helpers and the surface abstraction.

pub mod layout;
pub mod surface;

pub use layout::*;
pub use surface::*;

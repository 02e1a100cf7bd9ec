pub mod drag;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod logging;
pub mod space;

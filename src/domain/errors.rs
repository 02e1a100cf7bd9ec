use derive_more::Display;

/// Errors raised at the controller, config and DOM boundaries.
/// The decision engine itself never fails.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SpaceError {
    #[display(fmt = "Element not found: {}", _0)]
    ElementNotFound(String),
    #[display(fmt = "Invalid scale: {}", _0)]
    InvalidScale(f64),
    #[display(fmt = "Invalid config: {}", _0)]
    InvalidConfig(String),
    #[display(fmt = "Browser API error: {}", _0)]
    BrowserApi(String),
}

impl std::error::Error for SpaceError {}

pub type SpaceResult<T> = Result<T, SpaceError>;

/// Reject scales the decision engine cannot divide by.
pub fn ensure_scale(scale: f64) -> SpaceResult<f64> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(SpaceError::InvalidScale(scale))
    }
}

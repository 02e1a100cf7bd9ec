use strum::Display as StrumDisplay;

use crate::domain::errors::SpaceResult;
use crate::domain::geometry::{Frame, Position, Size};

/// Boxes managed by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Region {
    /// Scrollable viewport (or the page itself)
    #[strum(serialize = "wrapper")]
    Wrapper,
    /// Invisible sizing box that defines the scrollable extent
    #[strum(serialize = "fake-content")]
    FakeContent,
    /// Rendered payload inside the bounding container
    #[strum(serialize = "content")]
    Content,
}

/// Interface to the live layout the widget drives.
///
/// Reads are infallible snapshots of current geometry; writes may fail when
/// the host refuses a style or scroll update.
pub trait SpaceSurface {
    /// Handle of the element being dragged
    type Element;

    /// Size and position of a managed box. For the wrapper the size is the
    /// visible viewport.
    fn frame(&self, region: Region) -> Frame;

    /// Full scrollable extent of the wrapper
    fn scroll_size(&self) -> Size;

    /// Current wrapper scroll offsets, screen space
    fn scroll_offset(&self) -> Position;

    fn scroll_to(&mut self, offset: Position) -> SpaceResult<()>;

    fn resize(&mut self, region: Region, size: Size) -> SpaceResult<()>;

    fn move_to(&mut self, region: Region, position: Position) -> SpaceResult<()>;

    /// Geometry of the dragged element, margins excluded from the position
    fn element_frame(&self, element: &Self::Element) -> Frame;

    fn set_element_margin(&mut self, element: &Self::Element, margin: Position) -> SpaceResult<()>;

    fn set_element_position(&mut self, element: &Self::Element, position: Position) -> SpaceResult<()>;
}

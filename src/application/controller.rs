use serde::Serialize;

use crate::application::config::SpaceConfig;
use crate::domain::{
    drag::{Direction, DragDecision, GeometrySnapshot, calculate_drag},
    errors::SpaceResult,
    events::{SpaceChange, SpaceEvent},
    geometry::{Point, Position, Size},
    logging::{LogComponent, LogLevel, emit_with_metadata},
    space::{Region, SpaceSurface, centered_content, scroll_center},
};
use crate::drag_state::DragState;
use crate::{log_debug, log_info, log_warn};

/// What one processed drag tick did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragOutcome {
    pub decision: DragDecision,
    pub events: Vec<SpaceEvent>,
}

/// Drives a [`SpaceSurface`]: feeds geometry to the decision engine and
/// applies what it returns. Holds configuration only; tick state lives in
/// [`DragState`] owned by the caller.
pub struct InfiniteSpace<S: SpaceSurface> {
    config: SpaceConfig,
    surface: S,
}

impl<S: SpaceSurface> InfiniteSpace<S> {
    pub fn new(config: SpaceConfig, surface: S) -> SpaceResult<Self> {
        if let Err(e) = config.validate() {
            log_warn!(LogComponent::Application("InfiniteSpace"), "Rejected config: {}", e);
            return Err(e);
        }
        Ok(Self { config, surface })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Center the content inside the bounding container, center the viewport
    /// and return the initial drag state.
    pub fn init(&mut self, now_ms: u64) -> SpaceResult<DragState> {
        self.center_content()?;

        let viewport = self.surface.frame(Region::Wrapper).size;
        let center = scroll_center(self.surface.scroll_size(), viewport);
        self.surface.scroll_to(center)?;

        log_info!(
            LogComponent::Application("InfiniteSpace"),
            "🚀 Initialized, viewport centered at ({:.1}, {:.1})",
            center.left,
            center.top
        );

        Ok(DragState::new(self.config.scale, now_ms))
    }

    fn center_content(&mut self) -> SpaceResult<()> {
        let fake_content_size = match self.config.fake_content_size {
            Some(size) => {
                self.surface.resize(Region::FakeContent, size)?;
                size
            }
            None => self.surface.frame(Region::FakeContent).size,
        };
        let content_size = self
            .config
            .content_size
            .unwrap_or_else(|| self.surface.frame(Region::Content).size);

        self.surface.move_to(Region::Content, centered_content(fake_content_size, content_size))?;
        self.surface.resize(Region::Content, content_size)
    }

    /// Gather the decision engine input for `element` at `position`.
    pub fn snapshot(&self, state: &DragState, element: &S::Element, position: Point) -> GeometrySnapshot {
        let wrapper = self.surface.frame(Region::Wrapper);
        let fake_content = self.surface.frame(Region::FakeContent);
        let content = self.surface.frame(Region::Content);
        let dragged = self.surface.element_frame(element);
        let scroll = self.surface.scroll_offset();

        GeometrySnapshot {
            position,
            last_position: state.last_position,
            scale: state.scale,
            edge_distance: self.config.edge_distance,
            padding: self.config.padding,
            scroll_left: scroll.left,
            scroll_top: scroll.top,
            wrapper_width: wrapper.width(),
            wrapper_height: wrapper.height(),
            content_position: content.position,
            content_width: content.width(),
            content_height: content.height(),
            fake_content_position: fake_content.position,
            fake_content_width: fake_content.width(),
            fake_content_height: fake_content.height(),
            element_position: dragged.position,
            element_width: dragged.width(),
            element_height: dragged.height(),
            element_margin_top: state.element_margin.top,
            element_margin_left: state.element_margin.left,
        }
    }

    /// Process one drag tick, updating `state` in place.
    ///
    /// Ticks inside the throttle window leave `state` untouched and return no
    /// outcome. When a page write fails, `state` still reflects every write
    /// that went through before it, so the next tick does not repeat them.
    pub fn handle_drag(
        &mut self,
        state: &mut DragState,
        element: &S::Element,
        position: Point,
        now_ms: u64,
    ) -> SpaceResult<Option<DragOutcome>> {
        if state.is_throttled(now_ms, self.config.throttle_ms) {
            return Ok(None);
        }

        let snapshot = self.snapshot(state, element, position);
        let decision = calculate_drag(&snapshot);
        state.last_position = position;
        state.last_call_ms = now_ms;

        let edge = self.config.edge_distance;
        let step = self.config.scroll_step;
        let allow_negative = !self.config.disallow_negative_position;
        let mut events = Vec::new();

        let adjusted_top = allow_negative && decision.adjust_top;
        if adjusted_top {
            self.extend_negative(state, element, Direction::Top, &mut events)?;
        }

        let adjusted_left = allow_negative && decision.adjust_left;
        if adjusted_left {
            self.extend_negative(state, element, Direction::Left, &mut events)?;
        }

        if decision.adjust_right {
            let size = self.grow(Direction::Right, edge * 2.0)?;
            log_debug!(LogComponent::Application("Drag"), "adjust {} to {:?}", Direction::Right, size);
            events.push(SpaceEvent::BoundsAdjusted { direction: Direction::Right, size });
        }

        if decision.adjust_bottom {
            let size = self.grow(Direction::Bottom, edge)?;
            log_debug!(LogComponent::Application("Drag"), "adjust {} to {:?}", Direction::Bottom, size);
            events.push(SpaceEvent::BoundsAdjusted { direction: Direction::Bottom, size });
        }

        let from = Position::new(snapshot.scroll_left, snapshot.scroll_top);
        let mut to = from;
        if decision.scroll_to_top {
            to.top += -step + if adjusted_top { edge } else { 0.0 };
        }
        if decision.scroll_to_left {
            to.left += -step + if adjusted_left { edge } else { 0.0 };
        }
        if decision.scroll_to_right {
            to.left += step;
        }
        if decision.scroll_to_bottom {
            to.top += step;
        }
        if to != from {
            self.surface.scroll_to(to)?;
            log_debug!(LogComponent::Application("Drag"), "scroll {:?} -> {:?}", from, to);
            events.push(SpaceEvent::ViewportScrolled { from, to });
        }

        Ok(Some(DragOutcome { decision, events }))
    }

    /// Make room above or left of the content: shift the element margin back
    /// by `edge/scale`, then grow the container and move the content by the
    /// same amount. The margin goes first and is recorded in `state` as soon
    /// as it is written.
    fn extend_negative(
        &mut self,
        state: &mut DragState,
        element: &S::Element,
        direction: Direction,
        events: &mut Vec<SpaceEvent>,
    ) -> SpaceResult<()> {
        let shift = self.config.edge_distance / state.scale;
        let (dx, dy) = match direction {
            Direction::Top => (0.0, shift),
            Direction::Left => (shift, 0.0),
            Direction::Right | Direction::Bottom => return Ok(()),
        };

        let margin = Position::new(state.element_margin.left - dx, state.element_margin.top - dy);
        self.surface.set_element_margin(element, margin)?;
        state.element_margin = margin;

        let size = self.grow(direction, shift)?;
        let content = self.surface.frame(Region::Content).position;
        self.surface.move_to(
            Region::Content,
            Position::new(content.left / state.scale + dx, content.top / state.scale + dy),
        )?;

        log_debug!(LogComponent::Application("Drag"), "adjust {} to {:?}, margin {:?}", direction, size, margin);
        events.push(SpaceEvent::BoundsAdjusted { direction, size });
        events.push(SpaceEvent::MarginCompensated { margin });
        Ok(())
    }

    /// Grow the bounding container by `amount` towards `direction`.
    fn grow(&mut self, direction: Direction, amount: f64) -> SpaceResult<Size> {
        let current = self.surface.frame(Region::FakeContent).size;
        let size = match direction {
            Direction::Top | Direction::Bottom => Size::new(current.width, current.height + amount),
            Direction::Left | Direction::Right => Size::new(current.width + amount, current.height),
        };
        self.surface.resize(Region::FakeContent, size)?;
        Ok(size)
    }

    /// Finish the drag: fold the compensating margins into the element
    /// position, reset them, and report the final geometry.
    pub fn handle_drop(&mut self, state: DragState, element: &S::Element) -> SpaceResult<(DragState, SpaceChange)> {
        let position = self.surface.element_frame(element).position;
        let settled = Position::new(
            position.left + state.element_margin.left,
            position.top + state.element_margin.top,
        );
        self.surface.set_element_position(element, settled)?;
        self.surface.set_element_margin(element, Position::default())?;

        let state = state.reset_margins();
        let change = self.current_change(state.scale);

        emit_with_metadata(
            LogLevel::Info,
            LogComponent::Application("Drop"),
            "✅ Space changed".to_string(),
            serde_json::to_string(&change).unwrap_or_default(),
        );

        Ok((state, change))
    }

    /// Apply a new wrapper scale.
    pub fn update(&self, state: DragState, scale: f64) -> SpaceResult<DragState> {
        let updated = state.with_scale(scale)?;
        log_debug!(LogComponent::Application("InfiniteSpace"), "scale {} -> {}", state.scale, scale);
        Ok(updated)
    }

    pub fn current_change(&self, scale: f64) -> SpaceChange {
        SpaceChange {
            content: self.surface.frame(Region::Content),
            fake_content: self.surface.frame(Region::FakeContent),
            wrapper: self.surface.frame(Region::Wrapper),
            scale,
            scroll: self.surface.scroll_offset(),
        }
    }
}

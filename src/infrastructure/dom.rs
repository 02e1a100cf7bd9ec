//! Browser implementation of [`SpaceSurface`].
//!
//! Positions follow the page layout after the wrapper transform (margins
//! excluded), sizes are CSS pixels. When the wrapper is `<body>` the window
//! provides the viewport size and scroll offsets.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::application::config::SpaceConfig;
use crate::domain::{
    errors::{SpaceError, SpaceResult},
    geometry::{Frame, Position, Size},
    logging::LogComponent,
    space::{Region, SpaceSurface},
};
use crate::log_debug;

pub struct DomSurface {
    wrapper: HtmlElement,
    fake_content: HtmlElement,
    content: HtmlElement,
    is_body: bool,
}

impl DomSurface {
    /// Look up the three managed boxes by their configured selectors.
    pub fn from_config(config: &SpaceConfig) -> SpaceResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SpaceError::BrowserApi("Document not available".to_string()))?;

        let wrapper = query(&document, &config.wrapper)?;
        let is_body = wrapper.tag_name().eq_ignore_ascii_case("BODY");

        log_debug!(LogComponent::Infrastructure("DomSurface"), "Bound wrapper '{}' (body: {})", config.wrapper, is_body);

        Ok(Self {
            fake_content: query(&document, &config.fake_content)?,
            content: query(&document, &config.content)?,
            wrapper,
            is_body,
        })
    }

    fn region(&self, region: Region) -> &HtmlElement {
        match region {
            Region::Wrapper => &self.wrapper,
            Region::FakeContent => &self.fake_content,
            Region::Content => &self.content,
        }
    }

    fn viewport_size(&self) -> Size {
        if self.is_body {
            let window = gloo::utils::window();
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or_default();
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();
            Size::new(width, height)
        } else {
            css_size(&self.wrapper)
        }
    }
}

impl SpaceSurface for DomSurface {
    type Element = HtmlElement;

    fn frame(&self, region: Region) -> Frame {
        let element = self.region(region);
        let size = match region {
            Region::Wrapper => self.viewport_size(),
            _ => css_size(element),
        };
        Frame::new(size, layout_position(element))
    }

    fn scroll_size(&self) -> Size {
        Size::new(self.wrapper.scroll_width() as f64, self.wrapper.scroll_height() as f64)
    }

    fn scroll_offset(&self) -> Position {
        if self.is_body {
            let window = gloo::utils::window();
            Position::new(window.scroll_x().unwrap_or_default(), window.scroll_y().unwrap_or_default())
        } else {
            Position::new(self.wrapper.scroll_left() as f64, self.wrapper.scroll_top() as f64)
        }
    }

    fn scroll_to(&mut self, offset: Position) -> SpaceResult<()> {
        if self.is_body {
            gloo::utils::window().scroll_to_with_x_and_y(offset.left, offset.top);
        } else {
            self.wrapper.scroll_to_with_x_and_y(offset.left, offset.top);
        }
        Ok(())
    }

    fn resize(&mut self, region: Region, size: Size) -> SpaceResult<()> {
        let element = self.region(region);
        let target = region.to_string();
        set_px(element, &target, "width", size.width)?;
        set_px(element, &target, "height", size.height)
    }

    fn move_to(&mut self, region: Region, position: Position) -> SpaceResult<()> {
        let element = self.region(region);
        let target = region.to_string();
        set_px(element, &target, "left", position.left)?;
        set_px(element, &target, "top", position.top)
    }

    fn element_frame(&self, element: &HtmlElement) -> Frame {
        Frame::new(css_size(element), layout_position(element))
    }

    fn set_element_margin(&mut self, element: &HtmlElement, margin: Position) -> SpaceResult<()> {
        set_px(element, "dragged element", "margin-left", margin.left)?;
        set_px(element, "dragged element", "margin-top", margin.top)
    }

    fn set_element_position(&mut self, element: &HtmlElement, position: Position) -> SpaceResult<()> {
        set_px(element, "dragged element", "left", position.left)?;
        set_px(element, "dragged element", "top", position.top)
    }
}

fn query(document: &Document, selector: &str) -> SpaceResult<HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| SpaceError::BrowserApi(format!("Invalid selector '{}': {:?}", selector, e)))?
        .ok_or_else(|| SpaceError::ElementNotFound(selector.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SpaceError::BrowserApi(format!("'{}' is not an HTML element", selector)))
}

fn set_px(element: &HtmlElement, target: &str, property: &str, value: f64) -> SpaceResult<()> {
    element
        .style()
        .set_property(property, &format!("{}px", value))
        .map_err(|e| SpaceError::BrowserApi(format!("Failed to set {} on {}: {:?}", property, target, e)))
}

/// Computed CSS pixel value, `None` for `auto` and friends.
fn computed_px(element: &HtmlElement, property: &str) -> Option<f64> {
    let style = gloo::utils::window().get_computed_style(element).ok()??;
    let value = style.get_property_value(property).ok()?;
    value.trim().trim_end_matches("px").parse().ok()
}

fn css_size(element: &HtmlElement) -> Size {
    Size::new(
        computed_px(element, "width").unwrap_or(element.offset_width() as f64),
        computed_px(element, "height").unwrap_or(element.offset_height() as f64),
    )
}

/// Border-box position relative to the offset parent, minus margins.
fn layout_position(element: &HtmlElement) -> Position {
    let rect = element.get_bounding_client_rect();
    let (parent_left, parent_top) = match element.offset_parent() {
        Some(parent) => {
            let parent_rect = parent.get_bounding_client_rect();
            (
                parent_rect.left() + parent.client_left() as f64,
                parent_rect.top() + parent.client_top() as f64,
            )
        }
        None => (0.0, 0.0),
    };
    let margin_left = computed_px(element, "margin-left").unwrap_or_default();
    let margin_top = computed_px(element, "margin-top").unwrap_or_default();

    Position::new(rect.left() - parent_left - margin_left, rect.top() - parent_top - margin_top)
}

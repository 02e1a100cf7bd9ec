#![cfg(target_arch = "wasm32")]
use infinite_space_wasm::application::SpaceConfig;
use infinite_space_wasm::domain::errors::SpaceError;
use infinite_space_wasm::domain::geometry::{Position, Size};
use infinite_space_wasm::domain::space::{Region, SpaceSurface};
use infinite_space_wasm::infrastructure::DomSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str) -> HtmlElement {
    let document = gloo::utils::document();
    let wrapper = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    wrapper.set_id(id);
    wrapper
        .set_attribute("style", "position: relative; overflow: scroll; width: 400px; height: 300px;")
        .unwrap();
    wrapper.set_inner_html(
        r#"<div class="scroll-fake-content" style="position: relative; width: 1200px; height: 900px;">
             <div class="content" style="position: absolute; left: 0px; top: 0px; width: 400px; height: 300px;"></div>
           </div>"#,
    );
    gloo::utils::body().append_child(&wrapper).unwrap();
    wrapper
}

fn config(id: &str) -> SpaceConfig {
    SpaceConfig {
        wrapper: format!("#{}", id),
        fake_content: format!("#{} .scroll-fake-content", id),
        content: format!("#{} .content", id),
        ..Default::default()
    }
}

#[wasm_bindgen_test]
fn reads_css_sizes() {
    let wrapper = mount("space-sizes");
    let surface = DomSurface::from_config(&config("space-sizes")).unwrap();

    assert_eq!(surface.frame(Region::FakeContent).size, Size::new(1200.0, 900.0));
    assert_eq!(surface.frame(Region::Content).size, Size::new(400.0, 300.0));
    wrapper.remove();
}

#[wasm_bindgen_test]
fn writes_content_position() {
    let wrapper = mount("space-move");
    let mut surface = DomSurface::from_config(&config("space-move")).unwrap();

    surface.move_to(Region::Content, Position::new(400.0, 300.0)).unwrap();

    assert_eq!(surface.frame(Region::Content).position, Position::new(400.0, 300.0));
    wrapper.remove();
}

#[wasm_bindgen_test]
fn missing_element_is_reported() {
    let result = DomSurface::from_config(&config("space-missing"));
    assert!(matches!(result, Err(SpaceError::ElementNotFound(selector)) if selector == "#space-missing"));
}

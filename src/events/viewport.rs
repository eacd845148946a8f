use crate::dom;
use crate::input::SceneInput;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the scroll tracker current; the frame loop reads it once per frame.
pub fn wire_scroll_tracking(scene_input: Rc<RefCell<SceneInput>>) {
    scene_input.borrow_mut().scroll_y = dom::scroll_y();
    dom::add_window_listener("scroll", move || {
        scene_input.borrow_mut().scroll_y = dom::scroll_y();
    });
}

/// Resize the canvas with the viewport. The renderer notices the new
/// backing size on its next frame and reconfigures the surface and camera.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_viewport(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_to_viewport(&canvas_resize);
    });
}

use crate::dom;
use crate::input::{self, SceneInput};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer across the whole document for camera parallax.
pub fn wire_pointer_tracking(document: &web::Document, scene_input: Rc<RefCell<SceneInput>>) {
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::inner_size(&window);
        let pointer =
            input::pointer_normalized(ev.client_x() as f64, ev.client_y() as f64, w, h);
        scene_input.borrow_mut().pointer = pointer;
    });
}

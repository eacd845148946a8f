use crate::constants::MAX_PIXEL_RATIO;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector` under `root`. Invalid selectors yield
/// an empty list.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {selector:?}: {e:?}");
            Vec::new()
        }
    }
}

/// Same as [`query_all`] but searching the whole document.
pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {selector:?}: {e:?}");
            Vec::new()
        }
    }
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Attach a listener that lives for the rest of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    add_listener(element, "click", move |ev: web::MouseEvent| handler(ev));
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        add_listener(&window, event, move |_: web::Event| handler());
    }
}

/// Give `chosen` the class and take it away from every other element.
pub fn select_exclusive(elements: &[web::Element], chosen: &web::Element, class: &str) {
    for el in elements {
        _ = el.class_list().remove_1(class);
    }
    _ = chosen.class_list().add_1(class);
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, on: bool) {
    _ = element.class_list().toggle_with_force(class, on);
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Size the canvas to the viewport: css size in px, backing store scaled by
/// the capped device pixel ratio.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let (css_w, css_h) = inner_size(&w);
        let (w_px, h_px) =
            input::backing_size(css_w, css_h, w.device_pixel_ratio(), MAX_PIXEL_RATIO);
        let style = canvas.style();
        _ = style.set_property("width", &format!("{css_w}px"));
        _ = style.set_property("height", &format!("{css_h}px"));
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

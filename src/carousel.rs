use crate::constants::CAROUSEL_INTERVAL_MS;
use crate::core::{Autoplay, CarouselState, IntervalHost, SlideChange};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const ACTIVE: &str = "active";

/// Slide elements, their generated dots and the index state.
struct Slides {
    state: CarouselState,
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
}

impl Slides {
    fn apply(&self, change: SlideChange) {
        for list in [&self.slides, &self.dots] {
            if let Some(el) = list.get(change.from) {
                _ = el.class_list().remove_1(ACTIVE);
            }
            if let Some(el) = list.get(change.to) {
                _ = el.class_list().add_1(ACTIVE);
            }
        }
    }

    fn advance(&mut self) {
        let change = self.state.next();
        self.apply(change);
    }

    fn go_to(&mut self, index: usize) {
        if let Some(change) = self.state.go_to_slide(index) {
            self.apply(change);
        }
    }
}

/// `window.setInterval` driving one carousel.
struct WindowInterval {
    window: web::Window,
    tick: Closure<dyn FnMut()>,
}

impl IntervalHost for WindowInterval {
    type Handle = i32;

    fn set_interval(&mut self, period_ms: i32) -> Option<i32> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.tick.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| log::warn!("[carousel] setInterval failed: {:?}", e))
            .ok()
    }

    fn clear_interval(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}

/// Wire every `.carousel` on the page.
pub fn init(document: &web::Document) {
    let containers = dom::query_document(document, ".carousel");
    let mut wired = 0usize;
    for container in &containers {
        if init_one(document, container) {
            wired += 1;
        }
    }
    if wired > 0 {
        log::info!("[carousel] {} carousel(s) autoplaying", wired);
    }
}

fn init_one(document: &web::Document, container: &web::Element) -> bool {
    let slides = dom::query_all(container, ".carousel-slide");
    let Some(state) = CarouselState::new(slides.len()) else {
        return false;
    };
    let Some(window) = web::window() else {
        return false;
    };
    let Some(dots) = build_dots(document, container, slides.len()) else {
        return false;
    };

    let slides = Rc::new(RefCell::new(Slides {
        state,
        slides,
        dots: dots.clone(),
    }));

    for (index, dot) in dots.iter().enumerate() {
        let slides = slides.clone();
        dom::add_click_listener(dot, move |_| slides.borrow_mut().go_to(index));
    }

    let tick = {
        let slides = slides.clone();
        Closure::wrap(Box::new(move || slides.borrow_mut().advance()) as Box<dyn FnMut()>)
    };
    let autoplay = Rc::new(RefCell::new(Autoplay::new(
        WindowInterval { window, tick },
        CAROUSEL_INTERVAL_MS,
    )));
    autoplay.borrow_mut().start();

    {
        let autoplay = autoplay.clone();
        dom::add_listener(container, "mouseenter", move |_: web::Event| {
            autoplay.borrow_mut().stop();
        });
    }
    dom::add_listener(container, "mouseleave", move |_: web::Event| {
        autoplay.borrow_mut().start();
    });
    true
}

/// Append a `.carousel-dots` strip with one button per slide, the first
/// marked active.
fn build_dots(
    document: &web::Document,
    container: &web::Element,
    count: usize,
) -> Option<Vec<web::Element>> {
    let strip = document
        .create_element("div")
        .map_err(|e| log::warn!("[carousel] create dots: {:?}", e))
        .ok()?;
    strip.set_class_name("carousel-dots");
    let mut dots = Vec::with_capacity(count);
    for i in 0..count {
        let dot = document.create_element("button").ok()?;
        dot.set_class_name(if i == 0 { "carousel-dot active" } else { "carousel-dot" });
        _ = strip.append_child(&dot);
        dots.push(dot);
    }
    _ = container.append_child(&strip);
    Some(dots)
}

use crate::constants::{COUNTER_DURATION_MS, REVEAL_THRESHOLD};
use crate::core::{entered_viewport, CounterAnimation, CounterSpec, OnceGate};
use crate::dom;
use crate::frame::request_frame;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Scroll-triggered fade-ins and animated counters.
pub fn init(document: &web::Document) {
    let fades = dom::query_document(document, ".fade-in");
    let fade_count = fades.len();
    observe_once(fades, |el| {
        _ = el.class_list().add_1("visible");
    });

    let counters = dom::query_document(document, "[data-count]");
    let counter_count = counters.len();
    observe_once(counters, start_counter);

    log::info!(
        "[reveal] observing {} fade-ins, {} counters",
        fade_count,
        counter_count
    );
}

/// Run `on_enter` for each target the first time it is at least
/// [`REVEAL_THRESHOLD`] visible, then stop observing it.
fn observe_once(targets: Vec<web::Element>, on_enter: impl Fn(&web::Element) + 'static) {
    if targets.is_empty() {
        return;
    }
    let targets = Rc::new(targets);
    let gate = Rc::new(RefCell::new(OnceGate::new()));

    let targets_cb = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entered_viewport(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    REVEAL_THRESHOLD,
                ) {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(key) = targets_cb.iter().position(|t| *t == target) else {
                    continue;
                };
                if gate.borrow_mut().fire(key) {
                    on_enter(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for t in targets.iter() {
                observer.observe(t);
            }
        }
        Err(e) => log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e),
    }
    callback.forget();
}

/// Animate a `[data-count]` element from zero to its target. Elements whose
/// count is not a number are left as authored.
fn start_counter(element: &web::Element) {
    let spec = CounterSpec::from_attrs(
        element.get_attribute("data-count").as_deref(),
        element.get_attribute("data-suffix").as_deref(),
    );
    let Some(spec) = spec else {
        log::warn!("[reveal] skipping counter with non-numeric data-count");
        return;
    };
    let animation = CounterAnimation::new(spec, COUNTER_DURATION_MS);
    let element = element.clone();
    let started = Instant::now();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let frame = animation.frame(elapsed_ms);
        element.set_text_content(Some(&frame.text));
        if frame.done {
            // Drop our own closure; the animation is over.
            _ = tick_clone.borrow_mut().take();
        } else {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

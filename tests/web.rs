#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

mod carousel {
    include!("../src/core/carousel.rs");
}

use carousel::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct BrowserInterval {
    window: web_sys::Window,
    tick: Closure<dyn FnMut()>,
}

impl IntervalHost for BrowserInterval {
    type Handle = i32;

    fn set_interval(&mut self, period_ms: i32) -> Option<i32> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.tick.as_ref().unchecked_ref(),
                period_ms,
            )
            .ok()
    }

    fn clear_interval(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn browser_autoplay(
    state: Rc<RefCell<CarouselState>>,
    fires: Rc<Cell<u32>>,
    period_ms: i32,
) -> Autoplay<BrowserInterval> {
    let tick = Closure::wrap(Box::new(move || {
        state.borrow_mut().next();
        fires.set(fires.get() + 1);
    }) as Box<dyn FnMut()>);
    Autoplay::new(
        BrowserInterval {
            window: web_sys::window().unwrap(),
            tick,
        },
        period_ms,
    )
}

#[wasm_bindgen_test(async)]
async fn autoplay_advances_on_window_interval() {
    let state = Rc::new(RefCell::new(CarouselState::new(4).unwrap()));
    let fires = Rc::new(Cell::new(0));
    let mut autoplay = browser_autoplay(state.clone(), fires.clone(), 20);
    autoplay.start();
    sleep(150).await;
    autoplay.stop();
    let fired = fires.get();
    assert!(fired >= 1);
    assert_eq!(state.borrow().current(), fired as usize % 4);

    sleep(100).await;
    assert_eq!(fires.get(), fired);
}

#[wasm_bindgen_test(async)]
async fn restarting_autoplay_keeps_a_single_interval() {
    let state = Rc::new(RefCell::new(CarouselState::new(1000).unwrap()));
    let fires = Rc::new(Cell::new(0));
    let mut autoplay = browser_autoplay(state, fires.clone(), 50);
    for _ in 0..10 {
        autoplay.start();
    }
    sleep(120).await;
    autoplay.stop();
    // One interval fires about twice in 120ms; ten stacked ones would fire ~20 times.
    assert!(fires.get() <= 4);
}

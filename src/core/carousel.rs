// Carousel slide index state machine and autoplay timer bookkeeping.
//
// The DOM side owns the slide/dot elements and applies the returned
// `SlideChange`; the interval itself is abstracted behind `IntervalHost`
// so the single-timer rule can be exercised off the browser.

/// Which slide/dot pair lost and which gained the `active` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Debug)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    /// `None` for an empty carousel; there is nothing to cycle.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn go_to_slide(&mut self, index: usize) -> Option<SlideChange> {
        if index >= self.len {
            return None;
        }
        let change = SlideChange {
            from: self.current,
            to: index,
        };
        self.current = index;
        Some(change)
    }

    pub fn next(&mut self) -> SlideChange {
        let to = (self.current + 1) % self.len;
        let from = self.current;
        self.current = to;
        SlideChange { from, to }
    }
}

/// Something that can run a repeating callback and cancel it by handle.
pub trait IntervalHost {
    type Handle;

    fn set_interval(&mut self, period_ms: i32) -> Option<Self::Handle>;
    fn clear_interval(&mut self, handle: Self::Handle);
}

/// Owns at most one live interval on its host.
pub struct Autoplay<H: IntervalHost> {
    host: H,
    period_ms: i32,
    active: Option<H::Handle>,
}

impl<H: IntervalHost> Autoplay<H> {
    pub fn new(host: H, period_ms: i32) -> Self {
        Self {
            host,
            period_ms,
            active: None,
        }
    }

    /// Start (or restart) the interval. Any running interval is cleared
    /// first so repeated starts never stack timers.
    pub fn start(&mut self) {
        self.stop();
        self.active = self.host.set_interval(self.period_ms);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            self.host.clear_interval(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

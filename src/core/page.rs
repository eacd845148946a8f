// Small decisions behind the page interactions: navbar styling, anchor
// scroll targets, card filtering and one-shot viewport triggers.

use crate::constants::{HEADER_OFFSET_PX, NAVBAR_SCROLL_THRESHOLD};
use fnv::FnvHashSet;

/// Whether the navbar should carry its `scrolled` class. No hysteresis.
#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Window scroll position that brings an element just below the fixed
/// header. `element_top` is viewport-relative, `page_y_offset` the current
/// scroll position.
#[inline]
pub fn anchor_scroll_top(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET_PX
}

/// In-page anchor target as a selector, or `None` for hrefs that cannot
/// name an element (`#`, external links).
pub fn anchor_selector(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(href)
}

pub const FILTER_ALL: &str = "all";

/// Whether a card with `category` stays visible under `filter`.
#[inline]
pub fn card_matches(filter: &str, category: Option<&str>) -> bool {
    filter == FILTER_ALL || category == Some(filter)
}

/// Whether an intersection report counts as the element having entered the
/// viewport. Browsers may report a ratio a hair under the configured
/// threshold on the crossing itself.
#[inline]
pub fn entered_viewport(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    const RATIO_SLACK: f64 = 1e-3;
    is_intersecting && ratio + RATIO_SLACK >= threshold
}

/// Remembers which observed targets already fired.
#[derive(Debug, Default)]
pub struct OnceGate {
    fired: FnvHashSet<usize>,
}

impl OnceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time `key` is seen, `false` ever after.
    pub fn fire(&mut self, key: usize) -> bool {
        self.fired.insert(key)
    }

    pub fn has_fired(&self, key: usize) -> bool {
        self.fired.contains(&key)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

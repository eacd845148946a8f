pub mod pointer;
pub mod viewport;

pub use pointer::wire_pointer_tracking;
pub use viewport::{wire_canvas_resize, wire_scroll_tracking};

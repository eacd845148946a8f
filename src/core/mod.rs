pub mod carousel;
pub mod counter;
pub mod heart;
pub mod motion;
pub mod page;
pub mod theme;

pub use carousel::*;
pub use counter::*;
pub use heart::*;
pub use motion::*;
pub use page::*;
pub use theme::*;

// Shaders bundled as string constants
pub static GRADIENT_WGSL: &str = include_str!("../../shaders/gradient.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static HEARTS_WGSL: &str = include_str!("../../shaders/hearts.wgsl");

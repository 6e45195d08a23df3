pub mod paint;
pub mod text;

pub use paint::Paint;
pub use text::{display_width, rule, wrap};

pub mod content;
pub mod document;
pub mod skin;

pub use content::*;
pub use document::*;
pub use skin::*;

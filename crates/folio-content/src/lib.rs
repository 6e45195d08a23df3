// Content layer: the only source of what the shell displays.
// Everything here is immutable once a ContentStore has been built.

pub mod builtin;
mod error;
pub mod pack;
pub mod store;

pub use error::{Error, Result};
pub use pack::ContentPack;
pub use store::{ContentStore, Payload};

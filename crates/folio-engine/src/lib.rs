// Engine module - pure state transitions for the editor shell
// No I/O happens here: the presentation layer feeds actions in and reads state out.

pub mod navigation;
pub mod palette;
pub mod shell;
pub mod timer;

pub use navigation::Navigation;
pub use palette::{Palette, filter_documents};
pub use shell::{Action, Shell, ShellOptions};
pub use timer::OneShot;

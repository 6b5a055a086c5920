pub mod launcher;
pub mod shortcut_setup;

pub use launcher::{launch, OpenCommand, Pgrep};
pub use shortcut_setup::ensure_shortcut;

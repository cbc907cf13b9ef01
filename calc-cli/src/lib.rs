//! Terminal front end for the calculator engine.
//!
//! Maps typed keys to engine actions, renders the displays and wires up
//! settings and logging for the `calc` binary.

pub mod keymap;
pub mod logging;
pub mod repl;
pub mod session;
pub mod settings;

pub use keymap::{Key, KeyParseError};
pub use session::{Session, render, render_plain};
pub use settings::Settings;

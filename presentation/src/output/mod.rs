//! Console output for the workspace client

pub mod console;
pub mod typewriter;

pub use console::{ConsoleOutput, WaitingIndicator};
pub use typewriter::{Pacing, Typewriter};

/*!
## Rust Machine Module

This Rust module is the virtual machine. It holds the tape, the
loop stack and the program, and runs the program one character at
a time.

*/

pub type Address = usize;

mod config;
mod inspect;
mod program;
mod runtime;
mod stack;
mod tape;

pub use config::Config;
pub use inspect::Inspection;
pub use inspect::Pause;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use tape::Tape;

#[cfg(test)]
mod tests;

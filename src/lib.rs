//! # bfsim
//!
//! A simulator for the eight instruction byte tape language, with a
//! breakpoint instruction and a debugger that shows the machine as
//! it runs.
//!
//! Linux requires [Rust](https://www.rust-lang.org/tools/install) then
//! the command `cargo install bfsim`.
//!
//! Run a program by passing it on the command line. If you get the
//! following, you have achieved success.
//! ```text
//! $ bfsim '++++++++[>++++++++<-]>+.'
//! A
//! ```
//!
//! The library can be used without the terminal. Create a
//! [`Runtime`](mach::Runtime) and call `execute` until it halts.
//! ```
//! use bfsim::mach::{Config, Event, Runtime};
//!
//! let mut runtime = Runtime::new("++++++++[>++++++++<-]>+.", Config::default());
//! assert_eq!(runtime.execute(5000), Event::Halted("A".to_string()));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/instructions.rs"]
#[allow(non_snake_case)]
pub mod __Instructions;

#[path = "doc/debugging.rs"]
#[allow(non_snake_case)]
pub mod __Debugging;

pub mod lang;
pub mod mach;

//! # bfsim
//!
//! Runs a program given on the command line, in a file, or typed at
//! the prompt, and prints what it wrote.
//!

mod term;

fn main() {
    term::main();
}

/*!
# Rust Language Module

This Rust module decodes source characters into operations and
describes the errors a run can fail with.

*/

pub type Position = Option<usize>;

#[macro_use]
mod error;
mod op;

pub use error::Error;
pub use error::ErrorCode;
pub use op::Op;

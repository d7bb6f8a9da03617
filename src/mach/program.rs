use super::Address;
use crate::error;
use crate::lang::{Error, Op};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program text
///
/// The source characters in order. Never changes once loaded.

#[derive(Debug, Clone)]
pub struct Program {
    source: Rc<[char]>,
}

impl Program {
    pub fn new(source: &str) -> Program {
        Program {
            source: source.chars().collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.source.len()
    }
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
    pub fn op(&self, addr: Address) -> Option<Op> {
        self.source.get(addr).map(|ch| Op::from(*ch))
    }

    /// Finds the `]` balancing the `[` at `open` by counting brackets only.
    /// Nothing else is interpreted on the way.
    pub fn matching_close(&self, open: Address) -> Result<Address> {
        debug_assert_eq!(self.op(open), Some(Op::LoopOpen));
        let mut depth = 1usize;
        let mut addr = open;
        while depth > 0 {
            addr += 1;
            match self.op(addr) {
                Some(Op::LoopOpen) => depth += 1,
                Some(Op::LoopClose) => depth -= 1,
                Some(_) => {}
                None => return Err(error!(UnbalancedLoop)),
            }
        }
        Ok(addr)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.source.iter() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

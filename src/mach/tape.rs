use super::Address;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Byte memory
///
/// Starts as a single zero cell and grows one zero cell at a time
/// whenever the address moves past the end. The address never goes
/// below zero so reads and writes are always in bounds.

#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    address: Address,
}

impl Default for Tape {
    fn default() -> Tape {
        Tape {
            cells: vec![0],
            address: 0,
        }
    }
}

impl Tape {
    pub fn new() -> Tape {
        Tape::default()
    }
    pub fn read(&self) -> u8 {
        debug_assert!(self.cells.len() > self.address);
        self.cells[self.address]
    }
    pub fn write(&mut self, value: u8) {
        debug_assert!(self.cells.len() > self.address);
        self.cells[self.address] = value;
    }
    pub fn increment(&mut self) {
        self.write(self.read().wrapping_add(1));
    }
    pub fn decrement(&mut self) {
        self.write(self.read().wrapping_sub(1));
    }
    pub fn grow_to(&mut self, address: Address) {
        if self.cells.len() <= address {
            self.cells.resize(address + 1, 0);
        }
    }
    pub fn move_right(&mut self) {
        self.address += 1;
        self.grow_to(self.address);
    }
    pub fn move_left(&mut self) -> Result<()> {
        match self.address.checked_sub(1) {
            Some(address) => {
                self.address = address;
                Ok(())
            }
            None => Err(error!(AddressUnderflow)),
        }
    }
    pub fn address(&self) -> Address {
        self.address
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

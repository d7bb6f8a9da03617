use super::Address;
use crate::lang::Op;
use std::time::Duration;

/// How a paused run expects to be resumed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pause {
    /// Wait for an acknowledgment from the user.
    pub acknowledge: bool,
    /// Then sleep for this long.
    pub delay: Duration,
}

/// ## Snapshot of machine state
///
/// Taken after an instruction when the run pauses, or on demand with
/// `Runtime::inspect`. Breakpoints and on demand snapshots include the
/// output collected so far.

#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub instruction: Option<Op>,
    pub stack: Vec<Address>,
    pub tape: Vec<u8>,
    pub address: Address,
    pub output: Option<String>,
    pub pause: Pause,
}

impl Inspection {
    /// Draws the snapshot with `columns` cells per row of memory.
    /// The current cell is passed through `highlight`.
    pub fn render<F>(&self, columns: usize, highlight: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let columns = columns.max(1);
        let mut s = String::new();
        s.push_str(&"=".repeat(columns * 5));
        s.push('\n');
        match self.instruction {
            Some(op) => s.push_str(&format!("Instruction : {}\n", op)),
            None => s.push_str("Instruction :\n"),
        }
        s.push_str(&format!("Stack : {:?}\n", self.stack));
        s.push_str("Memory:\n");
        for (row, chunk) in self.tape.chunks(columns).enumerate() {
            let cells: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    let text = format!("0x{:02x}", value);
                    if row * columns + col == self.address {
                        highlight(&text)
                    } else {
                        text
                    }
                })
                .collect();
            s.push_str(&cells.join(" "));
            s.push('\n');
        }
        if let Some(output) = &self.output {
            s.push_str(output);
            s.push('\n');
        }
        s
    }
}

impl std::fmt::Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(16, |s| format!("[{}]", s)))
    }
}

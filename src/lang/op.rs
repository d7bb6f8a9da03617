/// ## Instruction set
///
/// Eight operations work on the tape, the loop stack and the
/// output buffer. `^` is a breakpoint for debugging. Every other
/// character is a comment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+` Add one to the current cell, wrapping 255 to 0.
    Increment,
    /// `-` Subtract one from the current cell, wrapping 0 to 255.
    Decrement,
    /// `>` Move to the next cell. The tape grows as needed.
    Right,
    /// `<` Move to the previous cell. Fails at address 0.
    Left,
    /// `.` Append the current cell as a character to the output.
    Output,
    /// `,` Store one character of input in the current cell.
    Input,
    /// `[` Skip past the matching `]` if the current cell is zero.
    LoopOpen,
    /// `]` Jump back to the matching `[` unless the current cell is zero.
    LoopClose,
    /// `^` Pause, show the machine state and the output so far.
    Breakpoint,
    Comment(char),
}

impl Op {
    /// Comments have no effect and never trigger step or delay pauses.
    pub fn is_effectful(&self) -> bool {
        !matches!(self, Op::Comment(_))
    }
}

impl From<char> for Op {
    fn from(ch: char) -> Op {
        match ch {
            '+' => Op::Increment,
            '-' => Op::Decrement,
            '>' => Op::Right,
            '<' => Op::Left,
            '.' => Op::Output,
            ',' => Op::Input,
            '[' => Op::LoopOpen,
            ']' => Op::LoopClose,
            '^' => Op::Breakpoint,
            _ => Op::Comment(ch),
        }
    }
}

impl From<Op> for char {
    fn from(op: Op) -> char {
        match op {
            Op::Increment => '+',
            Op::Decrement => '-',
            Op::Right => '>',
            Op::Left => '<',
            Op::Output => '.',
            Op::Input => ',',
            Op::LoopOpen => '[',
            Op::LoopClose => ']',
            Op::Breakpoint => '^',
            Op::Comment(ch) => ch,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

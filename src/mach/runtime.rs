use super::{Address, Config, Inspection, Pause, Program, Stack, Tape};
use crate::error;
use crate::lang::{Error, Op};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// A runtime owns one run of one program. Nothing is shared between
/// runtimes; make a new one to run again.
///
/// The runtime never blocks. `execute` runs instructions until the
/// cycle budget is spent or the program needs something from outside,
/// then reports it as an `Event`. Suspension only ever happens between
/// two instructions.

pub struct Runtime {
    program: Program,
    config: Config,
    tape: Tape,
    stack: Stack<Address>,
    output: String,
    pc: Address,
    last: Option<Op>,
    executed: usize,
    status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    AwaitingInput,
    Paused,
    Halted,
    Faulted,
}

/// Events are returned from `Runtime::execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The cycle budget ran out. Call `execute` again.
    Running,
    /// Waiting on `Runtime::enter` for one character.
    Input,
    /// Waiting on `Runtime::resume` as described by the inspection's pause.
    Inspect(Inspection),
    /// The program ran off its end. Here is the output.
    Halted(String),
    /// The run failed and produced no result.
    Faulted(Error),
}

enum Status {
    Running,
    AwaitingInput,
    Paused(Inspection),
    Halted,
    Faulted(Error),
}

/// Where the instruction pointer goes once an instruction is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Jump(Address),
}

impl Runtime {
    pub fn new(source: &str, config: Config) -> Runtime {
        Runtime {
            program: Program::new(source),
            config,
            tape: Tape::new(),
            stack: Stack::new(),
            output: String::new(),
            pc: 0,
            last: None,
            executed: 0,
            status: Status::Running,
        }
    }

    pub fn state(&self) -> State {
        match self.status {
            Status::Running => State::Running,
            Status::AwaitingInput => State::AwaitingInput,
            Status::Paused(_) => State::Paused,
            Status::Halted => State::Halted,
            Status::Faulted(_) => State::Faulted,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Address of the next instruction.
    pub fn position(&self) -> Address {
        self.pc
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn stack(&self) -> &Stack<Address> {
        &self.stack
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn inspect(&self) -> Inspection {
        self.snapshot(Pause::default())
    }

    /// Completes a pending `,` with the first character of `input`.
    /// An empty string stores zero.
    pub fn enter(&mut self, input: &str) {
        if !matches!(self.status, Status::AwaitingInput) {
            debug!(input, "input entered while not waiting for it");
            return;
        }
        let value = match input.chars().next() {
            Some(ch) => ch as u32 as u8,
            None => 0,
        };
        self.tape.write(value);
        self.status = Status::Running;
        self.retire(Op::Input, Step::Next);
    }

    pub fn resume(&mut self) {
        if let Status::Paused(_) = self.status {
            self.status = Status::Running;
        }
    }

    /// Fails the run with `Interrupted` unless it already finished.
    pub fn interrupt(&mut self) {
        match self.status {
            Status::Halted | Status::Faulted(_) => {}
            _ => self.fault(error!(Interrupted, Some(self.pc))),
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        let mut cycles = cycles;
        loop {
            if let Some(event) = self.event() {
                return event;
            }
            if cycles == 0 {
                return Event::Running;
            }
            cycles -= 1;
            self.step();
        }
    }

    fn event(&mut self) -> Option<Event> {
        if let Status::Running = self.status {
            if self.pc < self.program.len() {
                return None;
            }
            debug!(
                executed = self.executed,
                output_len = self.output.len(),
                "halted"
            );
            self.status = Status::Halted;
        }
        match &self.status {
            Status::Running => None,
            Status::AwaitingInput => Some(Event::Input),
            Status::Paused(inspection) => Some(Event::Inspect(inspection.clone())),
            Status::Halted => Some(Event::Halted(self.output.clone())),
            Status::Faulted(error) => Some(Event::Faulted(error.clone())),
        }
    }

    fn step(&mut self) {
        let op = match self.program.op(self.pc) {
            Some(op) => op,
            None => return,
        };
        self.executed += 1;
        match self.dispatch(op) {
            Ok(Some(step)) => self.retire(op, step),
            Ok(None) => self.status = Status::AwaitingInput,
            Err(error) => self.fault(error.at_position(Some(self.pc))),
        }
    }

    /// Applies the effect of `op`. Returns `None` when the
    /// instruction can't finish until input is entered.
    fn dispatch(&mut self, op: Op) -> Result<Option<Step>> {
        match op {
            Op::Increment => self.tape.increment(),
            Op::Decrement => self.tape.decrement(),
            Op::Right => self.tape.move_right(),
            Op::Left => self.tape.move_left()?,
            Op::Output => self.output.push(char::from(self.tape.read())),
            Op::Input => return Ok(None),
            Op::LoopOpen => {
                if self.tape.read() != 0 {
                    self.stack.push(self.pc);
                } else {
                    let close = self.program.matching_close(self.pc)?;
                    trace!(open = self.pc, close, "loop skipped");
                    return Ok(Some(Step::Jump(close + 1)));
                }
            }
            Op::LoopClose => {
                // Jumping onto the `[` runs its check again, which pushes
                // the same position back.
                let open = self.stack.pop()?;
                if self.tape.read() != 0 {
                    return Ok(Some(Step::Jump(open)));
                }
            }
            Op::Breakpoint | Op::Comment(_) => {}
        }
        Ok(Some(Step::Next))
    }

    /// Moves the instruction pointer past an applied instruction
    /// and pauses if the instruction or the config asks for it.
    fn retire(&mut self, op: Op, step: Step) {
        self.last = Some(op);
        self.pc = match step {
            Step::Next => self.pc + 1,
            Step::Jump(addr) => addr,
        };
        let pause = if op == Op::Breakpoint {
            Pause {
                acknowledge: true,
                delay: self.config.delay,
            }
        } else if op.is_effectful() && self.config.pauses() {
            Pause {
                acknowledge: self.config.step,
                delay: self.config.delay,
            }
        } else {
            return;
        };
        let mut inspection = self.snapshot(pause);
        if op != Op::Breakpoint {
            inspection.output = None;
        }
        trace!(instruction = %op, pc = self.pc, "paused");
        self.status = Status::Paused(inspection);
    }

    fn snapshot(&self, pause: Pause) -> Inspection {
        Inspection {
            instruction: self.last,
            stack: self.stack.iter().copied().collect(),
            tape: self.tape.cells().to_vec(),
            address: self.tape.address(),
            output: Some(self.output.clone()),
            pause,
        }
    }

    fn fault(&mut self, error: Error) {
        debug!(%error, executed = self.executed, "faulted");
        self.status = Status::Faulted(error);
    }
}

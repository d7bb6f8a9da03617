use crate::lang::{Error, ErrorCode};
use crate::mach::{Config, Event, Runtime, State};


fn run(source: &str) -> Result<String, Error> {
    run_cycles(&mut Runtime::new(source, Config::default()), 5000)
}

/// Drives a runtime to completion. Pauses are resumed at once and
/// every input request gets an empty line.
fn run_cycles(runtime: &mut Runtime, cycles: usize) -> Result<String, Error> {
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Halted(s) => return Ok(s.clone()),
            Event::Faulted(error) => return Err(error.clone()),
            Event::Running => {
                if prev_running {
                    panic!("{} execution cycles exceeded", cycles);
                }
            }
            Event::Input => runtime.enter(""),
            Event::Inspect(_) => runtime.resume(),
        }
        prev_running = matches!(event, Event::Running);
    }
}

fn code(result: Result<String, Error>) -> ErrorCode {
    result.unwrap_err().code()
}

#[test]
fn test_output_code_point() {
    assert_eq!(run("+++.").unwrap(), "\u{3}");
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(run("this + is + a + comment .").unwrap(), "\u{3}");
    assert_eq!(run("").unwrap(), "");
}

#[test]
fn test_hello() {
    let source = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]\
                  >>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
    assert_eq!(run(source).unwrap(), "Hello World!\n");
}

#[test]
fn test_latin1_output() {
    let mut source = String::new();
    for _ in 0..0xe9 {
        source.push('+');
    }
    source.push('.');
    assert_eq!(run(&source).unwrap(), "é");
}

#[test]
fn test_address_underflow() {
    let error = run("<").unwrap_err();
    assert_eq!(error.code(), ErrorCode::AddressUnderflow);
    assert_eq!(error.position(), Some(0));
    assert_eq!(code(run(">><<<")), ErrorCode::AddressUnderflow);
}

#[test]
fn test_fault_returns_no_output() {
    let mut r = Runtime::new("+++.<", Config::default());
    match r.execute(100) {
        Event::Faulted(error) => assert_eq!(error.code(), ErrorCode::AddressUnderflow),
        event => panic!("{:?}", event),
    }
    assert_eq!(r.state(), State::Faulted);
    assert_eq!(r.execute(100), r.execute(100));
}

#[test]
fn test_move_right_grows_tape() {
    let n = 12;
    let mut r = Runtime::new(&">".repeat(n), Config::default());
    assert_eq!(run_cycles(&mut r, 5000).unwrap(), "");
    let inspection = r.inspect();
    assert!(inspection.tape.len() >= n + 1);
    assert!(inspection.tape.iter().all(|v| *v == 0));
    assert_eq!(inspection.address, n);
    assert_eq!(r.tape().address(), n);
}

#[test]
fn test_input_round_trip() {
    let mut r = Runtime::new(",.", Config::default());
    assert_eq!(r.execute(100), Event::Input);
    assert_eq!(r.state(), State::AwaitingInput);
    r.enter("A");
    assert_eq!(r.execute(100), Event::Halted("A".to_string()));
}

#[test]
fn test_input_takes_first_char() {
    let mut r = Runtime::new(",.", Config::default());
    r.execute(100);
    r.enter("xyz");
    assert_eq!(r.execute(100), Event::Halted("x".to_string()));
}

#[test]
fn test_empty_input_is_zero() {
    let mut r = Runtime::new("+++++,", Config::default());
    assert_eq!(r.execute(100), Event::Input);
    r.enter("");
    assert_eq!(r.execute(100), Event::Halted(String::new()));
    assert_eq!(r.tape().read(), 0);
}

#[test]
fn test_wide_input_wraps() {
    let mut r = Runtime::new(",", Config::default());
    r.execute(100);
    r.enter("\u{141}");
    r.execute(100);
    assert_eq!(r.tape().read(), 0x41);
}

#[test]
fn test_input_waits_between_instructions() {
    let mut r = Runtime::new("+,+", Config::default());
    assert_eq!(r.execute(100), Event::Input);
    assert_eq!(r.position(), 1);
    assert_eq!(r.tape().read(), 1);
    assert_eq!(r.execute(100), Event::Input);
    r.enter("\u{7}");
    assert_eq!(r.position(), 2);
    r.execute(100);
    assert_eq!(r.tape().read(), 8);
}

#[test]
fn test_enter_ignored_when_not_waiting() {
    let mut r = Runtime::new("+", Config::default());
    r.enter("A");
    assert_eq!(r.tape().read(), 0);
    assert_eq!(r.execute(100), Event::Halted(String::new()));
}

#[test]
fn test_cycle_budget() {
    let mut r = Runtime::new("+++++.", Config::default());
    assert_eq!(r.execute(2), Event::Running);
    assert_eq!(r.position(), 2);
    assert_eq!(r.execute(0), Event::Running);
    assert_eq!(r.execute(2), Event::Running);
    assert_eq!(r.execute(2), Event::Halted("\u{5}".to_string()));
}

#[test]
fn test_interrupt() {
    let mut r = Runtime::new("+[]", Config::default());
    assert_eq!(r.execute(1000), Event::Running);
    r.interrupt();
    match r.execute(1000) {
        Event::Faulted(error) => assert_eq!(error.code(), ErrorCode::Interrupted),
        event => panic!("{:?}", event),
    }
}

#[test]
fn test_interrupt_while_awaiting_input() {
    let mut r = Runtime::new(",", Config::default());
    assert_eq!(r.execute(10), Event::Input);
    r.interrupt();
    assert_eq!(r.state(), State::Faulted);
    r.enter("A");
    assert_eq!(r.state(), State::Faulted);
}

#[test]
fn test_interrupt_after_halt_is_ignored() {
    let mut r = Runtime::new(".", Config::default());
    assert_eq!(r.execute(10), Event::Halted("\u{0}".to_string()));
    r.interrupt();
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_runs_are_independent() {
    let mut a = Runtime::new("+>++<[>.<-]", Config::default());
    let mut b = Runtime::new("+>++<[>.<-]", Config::default());
    assert_eq!(a.execute(5000), Event::Halted("\u{2}".to_string()));
    assert_eq!(b.execute(5000), Event::Halted("\u{2}".to_string()));
    assert_eq!(a.tape().cells(), b.tape().cells());
    assert!(b.stack().is_empty());
}

use bfsim::lang::Error;
use bfsim::mach::{Config, Event, Inspection, Runtime};

/// A finished run: what the program printed, or why it failed,
/// and every inspection shown along the way.
pub struct Transcript {
    pub result: Result<String, Error>,
    pub inspections: Vec<Inspection>,
}

pub fn exec(source: &str) -> Result<String, Error> {
    exec_with(source, Config::default(), &[]).result
}

pub fn exec_input(source: &str, input: &[&str]) -> Result<String, Error> {
    exec_with(source, Config::default(), input).result
}

/// Feeds `input` one line per request. Once it runs out every
/// request gets an empty line. Pauses are acknowledged at once.
pub fn exec_with(source: &str, config: Config, input: &[&str]) -> Transcript {
    let mut runtime = Runtime::new(source, config);
    let mut input = input.iter();
    let mut inspections = vec![];
    let mut prev_running = false;
    loop {
        let event = runtime.execute(5000);
        match &event {
            Event::Halted(s) => {
                return Transcript {
                    result: Ok(s.clone()),
                    inspections,
                }
            }
            Event::Faulted(error) => {
                return Transcript {
                    result: Err(error.clone()),
                    inspections,
                }
            }
            Event::Running => {
                if prev_running {
                    panic!("5000 execution cycles exceeded");
                }
            }
            Event::Input => runtime.enter(input.next().copied().unwrap_or("")),
            Event::Inspect(inspection) => {
                inspections.push(inspection.clone());
                runtime.resume();
            }
        }
        prev_running = matches!(event, Event::Running);
    }
}

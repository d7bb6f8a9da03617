extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::{Colour, Style};
use bfsim::lang::Op;
use bfsim::mach::{Config, Event, Inspection, Runtime};
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Each cell is drawn as `0x00 `.
const CELL_WIDTH: usize = 5;
const MAX_COLUMNS: usize = 16;

#[derive(Parser, Debug)]
#[command(name = "bfsim", version, about = "Run and debug byte tape programs")]
struct Cli {
    /// Program source. Asked for interactively when neither this nor --file is given
    source: Option<String>,

    /// Read the program from a file
    #[arg(short, long, conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Show the machine and wait for Enter after every instruction
    #[arg(short, long)]
    step: bool,

    /// Show the machine and sleep this many seconds after every instruction
    #[arg(short, long, default_value_t = 0.0)]
    delay: f64,

    /// Memory cells per row when showing the machine (default fits the terminal)
    #[arg(long)]
    columns: Option<usize>,

    /// Instructions to run between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

pub fn main() {
    setup_tracing();
    let cli = Cli::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(cli, interrupted) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn setup_tracing() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);
    let sub = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer);
    if let Err(error) = tracing::subscriber::set_global_default(sub) {
        eprintln!("{}", error);
    }
}

/// Returns false when the run faulted.
fn main_loop(cli: Cli, interrupted: Arc<AtomicBool>) -> io::Result<bool> {
    let interface = Interface::new("bfsim")?;
    interface.set_report_signal(Signal::Interrupt, true);

    let source = match load_source(&cli, &interface)? {
        Some(source) => source,
        None => return Ok(true),
    };
    let columns = cli.columns.unwrap_or_else(fit_columns);
    let mut runtime = Runtime::new(&source, Config::new(cli.step, cli.delay));

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(cli.cycles) {
            Event::Running => {}
            Event::Input => {
                interface.set_prompt("Input one character:")?;
                match interface.read_line()? {
                    ReadResult::Input(string) => runtime.enter(&string),
                    ReadResult::Eof => runtime.enter(""),
                    ReadResult::Signal(_) => runtime.interrupt(),
                }
            }
            Event::Inspect(inspection) => {
                show(&interface, &inspection, columns)?;
                if inspection.pause.acknowledge {
                    let prompt = if inspection.instruction == Some(Op::Breakpoint) {
                        "Press Enter to Continue!"
                    } else {
                        ""
                    };
                    interface.set_prompt(prompt)?;
                    if let ReadResult::Signal(_) = interface.read_line()? {
                        runtime.interrupt();
                        continue;
                    }
                }
                if inspection.pause.delay > Duration::default() {
                    std::thread::sleep(inspection.pause.delay);
                }
                runtime.resume();
            }
            Event::Halted(output) => {
                println!("{}", output);
                return Ok(true);
            }
            Event::Faulted(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                return Ok(false);
            }
        }
    }
}

fn load_source(cli: &Cli, interface: &Interface<DefaultTerminal>) -> io::Result<Option<String>> {
    if let Some(source) = &cli.source {
        return Ok(Some(source.clone()));
    }
    if let Some(path) = &cli.file {
        return read_file(path).map(Some);
    }
    interface.set_prompt("Brainfuck Code:")?;
    match interface.read_line()? {
        ReadResult::Input(string) => Ok(Some(string)),
        ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
    }
}

fn read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path).map_err(|error| {
        io::Error::new(error.kind(), format!("{}: {}", path.display(), error))
    })
}

fn show(
    interface: &Interface<DefaultTerminal>,
    inspection: &Inspection,
    columns: usize,
) -> io::Result<()> {
    let style = Colour::Green.normal();
    let text = inspection.render(columns, |s| style.paint(s).to_string());
    interface.write_fmt(format_args!("{}", text))
}

fn fit_columns() -> usize {
    match mortal::Terminal::new().and_then(|terminal| terminal.size()) {
        Ok(size) => (size.columns / CELL_WIDTH).max(1).min(MAX_COLUMNS),
        Err(_) => MAX_COLUMNS,
    }
}

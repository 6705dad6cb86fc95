extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use srpn::mach::{Event, Runtime};
use std::io::{BufRead, IsTerminal, Write};

mod config;
pub use config::Config;

/// Printed when the user interrupts the calculator.
pub const INTERRUPT_MESSAGE: &str = "signal: interrupt";

pub fn main(config: Config) {
    if let Err(error) = ctrlc::set_handler(|| {
        println!("{}", INTERRUPT_MESSAGE);
        std::process::exit(0);
    }) {
        log::warn!("Ctrl-C handler not installed: {}", error);
    }
    if let Err(error) = main_loop(config) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: Config) -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let styled = !config.no_color && std::io::stdout().is_terminal();

    evaluate_exprs(&mut runtime, &config, &mut std::io::stdout(), styled)?;
    if config.batch {
        return Ok(());
    }
    if std::io::stdin().is_terminal() {
        log::debug!("reading from terminal");
        interactive(&mut runtime, styled)
    } else {
        log::debug!("reading from pipe");
        // stdout stays unlocked so the Ctrl-C handler can print
        piped(&mut runtime, std::io::stdin().lock(), &mut std::io::stdout())
    }
}

fn interactive(runtime: &mut Runtime, styled: bool) -> std::io::Result<()> {
    let interface = Interface::new("srpn")?;
    interface.set_report_signal(Signal::Interrupt, true);

    loop {
        match interface.read_line()? {
            ReadResult::Input(line) => {
                for event in runtime.execute(&line).iter() {
                    interface.write_fmt(format_args!("{}\n", render(event, styled)))?;
                }
                if !line.trim().is_empty() {
                    interface.add_history_unique(line);
                }
            }
            ReadResult::Signal(Signal::Interrupt) => {
                interface.write_fmt(format_args!("{}\n", INTERRUPT_MESSAGE))?;
                break;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(())
}

fn evaluate_exprs<W: Write>(
    runtime: &mut Runtime,
    config: &Config,
    output: &mut W,
    styled: bool,
) -> std::io::Result<()> {
    for line in config.expr.iter() {
        let events = runtime.execute(line);
        write_events(output, &events, styled)?;
    }
    Ok(())
}

fn piped<R: BufRead, W: Write>(runtime: &mut Runtime, input: R, output: &mut W) -> std::io::Result<()> {
    for line in input.lines() {
        let s = runtime.enter(&line?);
        if !s.is_empty() {
            writeln!(output, "{}", s)?;
        }
    }
    Ok(())
}

fn write_events<W: Write>(output: &mut W, events: &[Event], styled: bool) -> std::io::Result<()> {
    for event in events.iter() {
        writeln!(output, "{}", render(event, styled))?;
    }
    Ok(())
}

fn render(event: &Event, styled: bool) -> String {
    match event {
        Event::Error(error) if styled => Style::new().bold().paint(error.to_string()).to_string(),
        _ => event.to_string(),
    }
}

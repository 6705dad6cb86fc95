use crate::mach::{Event, Runtime};


/// Feeds every line to the runtime and returns the output of the last one.
fn run(runtime: &mut Runtime, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        s = runtime.enter(line);
    }
    s
}

fn errors(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, Event::Error(_)))
        .count()
}

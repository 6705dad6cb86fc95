use srpn::mach::Runtime;

/// Runs a session the way the terminal does: every line is entered in
/// order and only non-empty results are kept.
pub fn exec(runtime: &mut Runtime, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        let out = runtime.enter(line);
        if !out.is_empty() {
            s.push_str(&out);
            s.push('\n');
        }
    }
    s
}

#[allow(dead_code)]
pub fn exec_fresh(lines: &[&str]) -> String {
    exec(&mut Runtime::default(), lines)
}

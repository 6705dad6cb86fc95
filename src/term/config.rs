use clap::Parser;

/// Saturated Reverse Polish Notation calculator.
///
/// Reads one line at a time and prints whatever the line produced.
/// Set RUST_LOG to see diagnostics on stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Evaluate LINE before reading input; may be repeated
    #[arg(short, long = "expr", value_name = "LINE", allow_hyphen_values = true)]
    pub expr: Vec<String>,

    /// Exit after the --expr lines instead of reading standard input
    #[arg(long)]
    pub batch: bool,

    /// Print diagnostics without terminal styling
    #[arg(long)]
    pub no_color: bool,
}

//! # SRPN
//!
//! Saturated Reverse Polish Notation calculator.
//!

use clap::Parser;

mod term;

fn main() {
    env_logger::init();
    term::main(term::Config::parse());
}

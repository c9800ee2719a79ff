//! bookmarkd entry point
//!
//! Parses arguments and dispatches via `cli::run`, printing any error to
//! stderr and exiting non-zero on failure.

use bookmarkd::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

//! Result presentation for merge, extract and restore runs.
//!
//! Commands report through the [`OutputFormatter`] trait and never print
//! directly; the human and JSON implementations decide how counters and
//! warnings reach the terminal.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;

use human::HumanFormatter;
use json::JsonFormatter;

/// Selects the formatter implied by the global CLI flags.
pub fn create_formatter(json: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(verbose, quiet))
    }
}

//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Debug lines go to stderr so they never mix with a `--json` result.

use std::fmt::Display;

use crate::core::network::Station;
use crate::core::types::TrainColor;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Render stations as an indented tree, one station per line.
///
/// Unrestricted stations show their name only; colored stations carry a
/// `[COLOR]` tag. Fork-groups are numbered from 1.
///
/// # Example
///
/// ```
/// use forkroute::core::network::Station;
/// use forkroute::core::types::{StationName, TrainColor};
/// use forkroute::ui::output::format_network;
///
/// let name = |s: &str| StationName::new(s).unwrap();
/// let stations = vec![
///     Station::new(name("A"), TrainColor::Unrestricted)
///         .with_fork(vec![Station::new(name("B"), TrainColor::Red)]),
/// ];
///
/// assert_eq!(format_network(&stations), "A\n  fork 1:\n    B [RED]");
/// ```
pub fn format_network(stations: &[Station]) -> String {
    let mut lines = Vec::new();
    render_stations(stations, 0, &mut lines);
    lines.join("\n")
}

fn render_stations(stations: &[Station], depth: usize, lines: &mut Vec<String>) {
    let indent = "    ".repeat(depth);
    for station in stations {
        if station.train_color == TrainColor::Unrestricted {
            lines.push(format!("{}{}", indent, station.name));
        } else {
            lines.push(format!("{}{} [{}]", indent, station.name, station.train_color));
        }

        for (i, group) in station.forks.iter().enumerate() {
            lines.push(format!("{}  fork {}:", indent, i + 1));
            render_stations(group, depth + 1, lines);
        }
    }
}

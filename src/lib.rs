//! Forkroute - Shortest routes through a rail network with colored forks
//!
//! Forkroute reads a rail network from a JSON document, asks for an origin,
//! a destination and a train color, and prints the shortest route a train of
//! that color may take.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to route)
//! - [`route`] - Runs the Build → Order → Select → Extract pipeline
//! - [`core`] - Domain types, network document, vocabulary, configuration
//! - [`ui`] - Prompts and output formatting
//!
//! # Routing Invariants
//!
//! 1. A train never passes a station whose color differs from its own
//! 2. A candidate route that contains the terminal station ends with it;
//!    one without it keeps its built order
//! 3. A route is printed only for stations the network contains

pub mod cli;
pub mod core;
pub mod route;
pub mod ui;

//! route
//!
//! Route modeling and selection.
//!
//! # Pipeline
//!
//! ```text
//! Network -> Build -> Order -> Select -> Extract -> Route
//! ```
//!
//! 1. **Build** ([`builder`]): color-filter the mainline and every fork-group,
//!    one candidate per fork-group
//! 2. **Order** ([`order`]): move the network's terminal station to the end
//!    of each candidate
//! 3. **Select** ([`select`]): keep candidates reaching the destination and
//!    pick the shortest
//! 4. **Extract** ([`extract`]): slice and orient the winner between the two
//!    endpoints
//!
//! [`pipeline`] wires the stages to a network source and a query source.
//!
//! # Invariants
//!
//! - Every stage is a pure function of its inputs
//! - Lengths are position-count differences, never physical distances
//! - A routing failure is never represented as an empty route

pub mod builder;
pub mod extract;
pub mod order;
pub mod pipeline;
pub mod select;

pub use builder::{build_options, RouteOptions};
pub use extract::sub_route;
pub use order::{move_terminal_last, order_routes};
pub use pipeline::{QueryError, QuerySource, RouteError, RouteOutcome, RouteRequest};
pub use select::{distance, shortest};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{StationName, TrainColor};

/// An ordered sequence of station names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<StationName>);

impl Route {
    pub fn new(stations: Vec<StationName>) -> Self {
        Self(stations)
    }

    pub fn stations(&self) -> &[StationName] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, station: &StationName) -> bool {
        self.0.contains(station)
    }

    /// Index of the first occurrence of `station`.
    pub fn first_position(&self, station: &StationName) -> Option<usize> {
        self.0.iter().position(|s| s == station)
    }

    /// Index of the last occurrence of `station`.
    pub fn last_position(&self, station: &StationName) -> Option<usize> {
        self.0.iter().rposition(|s| s == station)
    }

    pub fn first(&self) -> Option<&StationName> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&StationName> {
        self.0.last()
    }

    /// The same stations in the opposite direction.
    pub fn reversed(&self) -> Route {
        Route(self.0.iter().rev().cloned().collect())
    }

    pub(crate) fn as_mut_vec(&mut self) -> &mut Vec<StationName> {
        &mut self.0
    }
}

impl From<Vec<StationName>> for Route {
    fn from(stations: Vec<StationName>) -> Self {
        Self(stations)
    }
}

impl FromIterator<StationName> for Route {
    fn from_iter<I: IntoIterator<Item = StationName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(StationName::as_str).collect();
        f.write_str(&names.join(" -> "))
    }
}

/// Parameters of one routing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub from: StationName,
    pub to: StationName,
    pub color: TrainColor,
}

impl Query {
    pub fn new(from: StationName, to: StationName, color: TrainColor) -> Self {
        Self { from, to, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(names: &[&str]) -> Route {
        names.iter().map(|n| StationName::new(*n).unwrap()).collect()
    }

    fn name(s: &str) -> StationName {
        StationName::new(s).unwrap()
    }

    #[test]
    fn positions() {
        let r = route(&["A", "B", "A", "C"]);
        assert_eq!(r.first_position(&name("A")), Some(0));
        assert_eq!(r.last_position(&name("A")), Some(2));
        assert_eq!(r.first_position(&name("Z")), None);
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(route(&["A", "B", "C"]).to_string(), "A -> B -> C");
        assert_eq!(route(&[]).to_string(), "");
    }

    #[test]
    fn reversed() {
        assert_eq!(route(&["A", "B", "C"]).reversed(), route(&["C", "B", "A"]));
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&route(&["A", "B"])).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
    }
}

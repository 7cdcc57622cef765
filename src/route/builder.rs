//! route::builder
//!
//! Candidate route construction.
//!
//! # Algorithm
//!
//! Stations are visited in document order. A station compatible with the
//! train color joins the mainline. Every fork-group of every station
//! (compatible or not) contributes one filtered option, in encounter order,
//! even when filtering empties it. Each option yields one candidate:
//! `mainline ++ option`.
//!
//! Only one level of nesting is inspected; fork-groups inside fork-groups
//! are ignored.

use crate::core::network::Station;
use crate::core::types::{StationName, TrainColor};

use super::Route;

/// Mainline and per-fork continuations for one train color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Compatible top-level stations, in order.
    pub mainline: Vec<StationName>,
    /// One filtered continuation per fork-group encountered.
    pub forks: Vec<Vec<StationName>>,
}

impl RouteOptions {
    /// One candidate route per fork option.
    ///
    /// A network without forks yields no candidates.
    pub fn candidates(&self) -> Vec<Route> {
        self.forks
            .iter()
            .map(|fork| {
                self.mainline
                    .iter()
                    .chain(fork.iter())
                    .cloned()
                    .collect::<Route>()
            })
            .collect()
    }
}

/// Split `stations` into a color-filtered mainline and fork options.
///
/// # Example
///
/// ```
/// use forkroute::core::network::Station;
/// use forkroute::core::types::{StationName, TrainColor};
/// use forkroute::route::build_options;
///
/// let name = |s: &str| StationName::new(s).unwrap();
/// let stations = vec![
///     Station::new(name("A"), TrainColor::Unrestricted)
///         .with_fork(vec![Station::new(name("B"), TrainColor::Red)])
///         .with_fork(vec![Station::new(name("C"), TrainColor::Green)]),
/// ];
///
/// let options = build_options(&stations, TrainColor::Red);
/// assert_eq!(options.mainline, vec![name("A")]);
/// assert_eq!(options.forks, vec![vec![name("B")], vec![]]);
/// ```
pub fn build_options(stations: &[Station], color: TrainColor) -> RouteOptions {
    let mut options = RouteOptions::default();

    for station in stations {
        if station.admits(color) {
            options.mainline.push(station.name.clone());
        }

        for group in &station.forks {
            options.forks.push(filter_names(group, color));
        }
    }

    options
}

fn filter_names(group: &[Station], color: TrainColor) -> Vec<StationName> {
    group
        .iter()
        .filter(|s| s.admits(color))
        .map(|s| s.name.clone())
        .collect()
}

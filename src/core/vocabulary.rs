//! core::vocabulary
//!
//! Station and color vocabularies of a loaded network.
//!
//! User input (prompts, flags) is validated against a [`Vocabulary`]
//! rather than compiled-in constants, so the same pipeline runs against
//! any network document.

use super::network::Station;
use super::types::{StationName, TrainColor};

/// The closed sets of values a query may draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    stations: Vec<StationName>,
    colors: Vec<TrainColor>,
}

impl Vocabulary {
    /// Collect every station name reachable in `stations`, depth-first in
    /// document order, without duplicates.
    pub fn from_stations(stations: &[Station]) -> Self {
        fn walk(stations: &[Station], out: &mut Vec<StationName>) {
            for station in stations {
                if !out.contains(&station.name) {
                    out.push(station.name.clone());
                }
                for group in &station.forks {
                    walk(group, out);
                }
            }
        }

        let mut names = Vec::new();
        walk(stations, &mut names);

        Self {
            stations: names,
            colors: TrainColor::ALL.to_vec(),
        }
    }

    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    pub fn colors(&self) -> &[TrainColor] {
        &self.colors
    }

    pub fn contains_station(&self, name: &StationName) -> bool {
        self.stations.contains(name)
    }

    /// Resolve user text to a station of this vocabulary.
    ///
    /// An exact match wins; otherwise the first case-insensitive match is
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use forkroute::core::network::{Network, Station};
    /// use forkroute::core::types::{StationName, TrainColor};
    ///
    /// let network = Network::new(vec![
    ///     Station::new(StationName::new("Alameda").unwrap(), TrainColor::Unrestricted),
    /// ]);
    /// let vocabulary = network.vocabulary();
    ///
    /// assert_eq!(vocabulary.resolve_station("alameda").unwrap().as_str(), "Alameda");
    /// assert!(vocabulary.resolve_station("Bellavista").is_none());
    /// ```
    pub fn resolve_station(&self, input: &str) -> Option<&StationName> {
        let input = input.trim();
        self.stations
            .iter()
            .find(|s| s.as_str() == input)
            .or_else(|| {
                self.stations
                    .iter()
                    .find(|s| s.as_str().eq_ignore_ascii_case(input))
            })
    }

    /// Resolve user text to a color of this vocabulary.
    pub fn resolve_color(&self, input: &str) -> Option<TrainColor> {
        input
            .parse::<TrainColor>()
            .ok()
            .filter(|c| self.colors.contains(c))
    }

    pub fn station_labels(&self) -> Vec<&str> {
        self.stations.iter().map(StationName::as_str).collect()
    }

    pub fn color_labels(&self) -> Vec<&str> {
        self.colors.iter().map(|c| c.as_str()).collect()
    }
}

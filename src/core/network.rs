//! core::network
//!
//! Station network model and loading.
//!
//! # Document Format
//!
//! A network is a JSON array of stations in travel order. Each station may
//! carry fork-groups: alternative continuation chains, each an ordered array
//! of stations.
//!
//! ```json
//! [
//!   { "name": "A", "forks": null, "train_color": "WITHOUT COLOR" },
//!   { "name": "C", "forks": [
//!       [ { "name": "D", "train_color": "WITHOUT COLOR" } ],
//!       [ { "name": "H", "train_color": "RED" } ]
//!   ], "train_color": "WITHOUT COLOR" },
//!   { "name": "F", "forks": null, "train_color": "WITHOUT COLOR" }
//! ]
//! ```
//!
//! `forks` may be `null` or omitted; both mean "no forks".
//!
//! # Invariants
//!
//! - A loaded network is never mutated
//! - Document order is preserved everywhere (stations and fork-groups)
//! - Structural validation stops at serde: names and colors must parse,
//!   topology is taken as given

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::types::{StationName, TrainColor};
use super::vocabulary::Vocabulary;

/// Errors from loading a network document.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to read network file '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse network file '{path}'")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A station and the fork-groups branching from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: StationName,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub forks: Vec<Vec<Station>>,

    pub train_color: TrainColor,
}

impl Station {
    /// Create a station without forks.
    pub fn new(name: StationName, train_color: TrainColor) -> Self {
        Self {
            name,
            forks: Vec::new(),
            train_color,
        }
    }

    /// Attach a fork-group, builder style.
    pub fn with_fork(mut self, group: Vec<Station>) -> Self {
        self.forks.push(group);
        self
    }

    /// Whether this station is a branch point.
    pub fn is_branch(&self) -> bool {
        !self.forks.is_empty()
    }

    /// Whether a train of `color` may stop here.
    pub fn admits(&self, color: TrainColor) -> bool {
        color.is_compatible_with(self.train_color)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Vec<Station>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Vec<Station>>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An immutable, ordered station network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network {
    stations: Vec<Station>,
}

impl Network {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Load a network from a JSON document on disk.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::ReadError` if the file cannot be read and
    /// `NetworkError::ParseError` if it is not a valid network document.
    pub fn load(path: &Path) -> Result<Self, NetworkError> {
        let contents = fs::read_to_string(path).map_err(|e| NetworkError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&contents).map_err(|e| NetworkError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse a network from JSON text.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Top-level stations in document order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The network's fixed final station: the last top-level station.
    pub fn terminal(&self) -> Option<&StationName> {
        self.stations.last().map(|s| &s.name)
    }

    /// Total number of stations, fork members included.
    pub fn station_count(&self) -> usize {
        fn count(stations: &[Station]) -> usize {
            stations
                .iter()
                .map(|s| 1 + s.forks.iter().map(|g| count(g)).sum::<usize>())
                .sum()
        }
        count(&self.stations)
    }

    /// Station and color vocabularies of this network.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::from_stations(&self.stations)
    }
}

/// Source of the station network for one run.
pub trait NetworkSource {
    /// Load the network.
    fn load(&self) -> Result<Network, NetworkError>;
}

/// A network document on disk.
#[derive(Debug, Clone)]
pub struct FileNetwork {
    path: PathBuf,
}

impl FileNetwork {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NetworkSource for FileNetwork {
    fn load(&self) -> Result<Network, NetworkError> {
        Network::load(&self.path)
    }
}

impl NetworkSource for Network {
    fn load(&self) -> Result<Network, NetworkError> {
        Ok(self.clone())
    }
}

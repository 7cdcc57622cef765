//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StationName`] - Validated station identifier
//! - [`TrainColor`] - Compatibility tag carried by trains, stations and forks
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use forkroute::core::types::{StationName, TrainColor};
//!
//! let station = StationName::new("A").unwrap();
//! assert_eq!(station.as_str(), "A");
//!
//! let color: TrainColor = "red".parse().unwrap();
//! assert!(color.is_compatible_with(TrainColor::Unrestricted));
//!
//! assert!(StationName::new("").is_err());
//! assert!("BLUE".parse::<TrainColor>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid station name: {0}")]
    InvalidStationName(String),

    #[error("invalid train color '{0}', must be one of: RED, GREEN, WITHOUT COLOR")]
    InvalidTrainColor(String),
}

/// A validated station name.
///
/// Station names are unique identifiers within a network:
/// - Cannot be empty
/// - Cannot start or end with whitespace
/// - Cannot contain control characters
///
/// Comparison is exact. Case-insensitive lookup of user input is the job of
/// [`crate::core::vocabulary::Vocabulary`].
///
/// # Example
///
/// ```
/// use forkroute::core::types::StationName;
///
/// let name = StationName::new("Central").unwrap();
/// assert_eq!(name.to_string(), "Central");
///
/// assert!(StationName::new(" padded").is_err());
/// assert!(StationName::new("line\nbreak").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationName(String);

impl StationName {
    /// Create a new validated station name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidStationName` if the name is empty, padded
    /// with whitespace, or contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidStationName(
                "station name cannot be empty".into(),
            ));
        }

        if name.trim() != name {
            return Err(TypeError::InvalidStationName(format!(
                "station name '{name}' cannot start or end with whitespace"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(TypeError::InvalidStationName(
                "station name cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> Self {
        name.0
    }
}

impl AsRef<str> for StationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Train color.
///
/// The set is closed. `Unrestricted` is serialized as `"WITHOUT COLOR"`,
/// the spelling used by network documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainColor {
    #[serde(rename = "RED")]
    Red,
    #[serde(rename = "GREEN")]
    Green,
    #[default]
    #[serde(rename = "WITHOUT COLOR", alias = "UNRESTRICTED")]
    Unrestricted,
}

impl TrainColor {
    /// Every color, in display order.
    pub const ALL: [TrainColor; 3] = [TrainColor::Red, TrainColor::Green, TrainColor::Unrestricted];

    /// Canonical name as written in network documents and prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainColor::Red => "RED",
            TrainColor::Green => "GREEN",
            TrainColor::Unrestricted => "WITHOUT COLOR",
        }
    }

    /// Whether a train of this color may stop at a station tagged `other`.
    ///
    /// The relation is symmetric: `Unrestricted` on either side matches
    /// everything, otherwise the colors must be equal.
    ///
    /// # Example
    ///
    /// ```
    /// use forkroute::core::types::TrainColor;
    ///
    /// assert!(TrainColor::Red.is_compatible_with(TrainColor::Unrestricted));
    /// assert!(TrainColor::Unrestricted.is_compatible_with(TrainColor::Green));
    /// assert!(!TrainColor::Red.is_compatible_with(TrainColor::Green));
    /// ```
    pub fn is_compatible_with(self, other: TrainColor) -> bool {
        self == TrainColor::Unrestricted || other == TrainColor::Unrestricted || self == other
    }
}

impl FromStr for TrainColor {
    type Err = TypeError;

    /// Parse user text. Case-insensitive; `UNRESTRICTED` is accepted as an
    /// alias of `WITHOUT COLOR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "RED" => Ok(TrainColor::Red),
            "GREEN" => Ok(TrainColor::Green),
            "WITHOUT COLOR" | "UNRESTRICTED" => Ok(TrainColor::Unrestricted),
            _ => Err(TypeError::InvalidTrainColor(s.to_string())),
        }
    }
}

impl fmt::Display for TrainColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

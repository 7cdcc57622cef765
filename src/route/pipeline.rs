//! route::pipeline
//!
//! One routing request, from network source to ordered station list.
//!
//! # Lifecycle
//!
//! ```text
//! Load network -> Vocabulary -> Query -> Build -> Order -> Select -> Extract
//! ```
//!
//! Each stage surfaces its own failure immediately; nothing is retried and
//! no partial route is returned on an error path.

use serde::Serialize;
use thiserror::Error;

use crate::core::network::{Network, NetworkError, NetworkSource};
use crate::core::types::{StationName, TrainColor};
use crate::core::vocabulary::Vocabulary;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::PromptError;

use super::{build_options, distance, order_routes, shortest, sub_route, Query, Route};

/// Errors from obtaining the query parameters.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unknown station '{0}'")]
    UnknownStation(String),

    #[error("unknown train color '{0}'")]
    UnknownColor(String),

    #[error("failed to read input: {0}")]
    Prompt(#[from] PromptError),
}

/// Errors from a routing request.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Load(#[from] NetworkError),

    #[error(transparent)]
    Input(#[from] QueryError),

    #[error("network has no stations")]
    EmptyNetwork,

    #[error("terminal station '{0}' is not part of the network")]
    UnknownTerminal(StationName),

    #[error("invalid combination: no {color} route from {from} to {to}")]
    InvalidCombination {
        from: StationName,
        to: StationName,
        color: TrainColor,
    },
}

impl RouteError {
    fn invalid_combination(query: &Query) -> Self {
        RouteError::InvalidCombination {
            from: query.from.clone(),
            to: query.to.clone(),
            color: query.color,
        }
    }
}

/// Source of the query parameters for one run.
pub trait QuerySource {
    /// Produce a query whose stations belong to `vocabulary`.
    fn query(&mut self, vocabulary: &Vocabulary) -> Result<Query, QueryError>;
}

impl QuerySource for Query {
    fn query(&mut self, vocabulary: &Vocabulary) -> Result<Query, QueryError> {
        for station in [&self.from, &self.to] {
            if !vocabulary.contains_station(station) {
                return Err(QueryError::UnknownStation(station.to_string()));
            }
        }
        Ok(self.clone())
    }
}

/// Result of a successful request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOutcome {
    #[serde(flatten)]
    pub query: Query,
    pub route: Route,
}

/// A single routing request.
pub struct RouteRequest<'a> {
    pub network: &'a dyn NetworkSource,
    pub query: &'a mut dyn QuerySource,
    /// Overrides the network's own terminal station.
    pub terminal: Option<StationName>,
    pub verbosity: Verbosity,
}

impl RouteRequest<'_> {
    /// Run the request to completion.
    ///
    /// # Errors
    ///
    /// - `RouteError::Load` if the network cannot be loaded
    /// - `RouteError::EmptyNetwork` / `UnknownTerminal` for unusable topologies
    /// - `RouteError::Input` if the query cannot be obtained
    /// - `RouteError::InvalidCombination` if no route connects the stations
    pub fn handle(self) -> Result<RouteOutcome, RouteError> {
        let verbosity = self.verbosity;

        let network = self.network.load()?;
        output::debug(
            format!(
                "Loaded network: {} top-level stations, {} total",
                network.stations().len(),
                network.station_count()
            ),
            verbosity,
        );

        let vocabulary = network.vocabulary();
        let terminal = match self.terminal {
            Some(terminal) if vocabulary.contains_station(&terminal) => terminal,
            Some(terminal) => return Err(RouteError::UnknownTerminal(terminal)),
            None => network.terminal().cloned().ok_or(RouteError::EmptyNetwork)?,
        };
        output::debug(format!("Terminal station: {}", terminal), verbosity);

        let query = self.query.query(&vocabulary)?;
        output::debug(
            format!(
                "Query: {} -> {} ({} train)",
                query.from, query.to, query.color
            ),
            verbosity,
        );

        let route = plan(&network, &terminal, &query, verbosity)?;
        Ok(RouteOutcome { query, route })
    }
}

/// Build, order, select and extract the route answering `query`.
///
/// # Example
///
/// ```
/// use forkroute::core::network::{Network, Station};
/// use forkroute::core::types::{StationName, TrainColor};
/// use forkroute::route::pipeline::plan;
/// use forkroute::route::Query;
/// use forkroute::ui::output::Verbosity;
///
/// fn name(s: &str) -> StationName {
///     StationName::new(s).unwrap()
/// }
///
/// let network = Network::new(vec![
///     Station::new(name("A"), TrainColor::Unrestricted).with_fork(vec![
///         Station::new(name("B"), TrainColor::Red),
///     ]),
///     Station::new(name("F"), TrainColor::Unrestricted),
/// ]);
/// let query = Query::new(name("A"), name("F"), TrainColor::Red);
///
/// let route = plan(&network, &name("F"), &query, Verbosity::Quiet).unwrap();
/// assert_eq!(route.to_string(), "A -> B -> F");
/// ```
pub fn plan(
    network: &Network,
    terminal: &StationName,
    query: &Query,
    verbosity: Verbosity,
) -> Result<Route, RouteError> {
    let options = build_options(network.stations(), query.color);
    let mut candidates = options.candidates();
    output::debug(
        format!(
            "Built {} candidate routes over a mainline of {} stations",
            candidates.len(),
            options.mainline.len()
        ),
        verbosity,
    );

    order_routes(&mut candidates, terminal);
    for candidate in &candidates {
        output::debug(format!("Candidate: {}", candidate), verbosity);
    }

    let best = shortest(&candidates, &query.from, &query.to)
        .ok_or_else(|| RouteError::invalid_combination(query))?;
    if let Some(length) = distance(best, &query.from, &query.to) {
        output::debug(format!("Selected: {} (distance {})", best, length), verbosity);
    }

    sub_route(best, &query.from, &query.to).ok_or_else(|| RouteError::invalid_combination(query))
}

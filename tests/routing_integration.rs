//! Integration tests for the routing pipeline.
//!
//! These tests run full requests against the reference network: load,
//! query, build, order, select and extract.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use forkroute::core::network::{FileNetwork, Network, NetworkError, Station};
use forkroute::core::types::{StationName, TrainColor};
use forkroute::route::{Query, QueryError, RouteError, RouteOutcome, RouteRequest};
use forkroute::ui::output::Verbosity;
use forkroute::ui::prompts::{PromptError, Prompter, QueryPrompt};

// =============================================================================
// Test Fixtures
// =============================================================================

fn name(s: &str) -> StationName {
    StationName::new(s).unwrap()
}

fn reference_document() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/train_network.json")
}

fn reference_network() -> Network {
    Network::load(&reference_document()).unwrap()
}

fn route(from: &str, to: &str, color: TrainColor) -> Result<RouteOutcome, RouteError> {
    let network = reference_network();
    let mut query = Query::new(name(from), name(to), color);
    RouteRequest {
        network: &network,
        query: &mut query,
        terminal: None,
        verbosity: Verbosity::Quiet,
    }
    .handle()
}

fn stations(outcome: &RouteOutcome) -> Vec<&str> {
    outcome.route.stations().iter().map(|s| s.as_str()).collect()
}

// =============================================================================
// End-to-end routes
// =============================================================================

#[test]
fn unrestricted_train_takes_plain_fork() {
    let outcome = route("A", "F", TrainColor::Unrestricted).unwrap();
    assert_eq!(stations(&outcome), ["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn red_train_skips_green_stations() {
    let outcome = route("A", "F", TrainColor::Red).unwrap();
    assert_eq!(stations(&outcome), ["A", "B", "C", "H", "F"]);
}

#[test]
fn green_train_tie_goes_to_later_fork() {
    let outcome = route("A", "F", TrainColor::Green).unwrap();
    assert_eq!(stations(&outcome), ["A", "B", "C", "G", "I", "F"]);
}

#[test]
fn reverse_direction_reads_from_initial_station() {
    let outcome = route("F", "B", TrainColor::Green).unwrap();
    assert_eq!(stations(&outcome), ["F", "I", "G", "C", "B"]);
}

#[test]
fn unrestricted_train_reaches_fork_station() {
    let outcome = route("F", "D", TrainColor::Unrestricted).unwrap();
    assert_eq!(stations(&outcome), ["F", "E", "D"]);
}

#[test]
fn red_train_inside_plain_fork() {
    let outcome = route("B", "D", TrainColor::Red).unwrap();
    assert_eq!(stations(&outcome), ["B", "C", "D"]);
}

#[test]
fn same_station_is_single_element_route() {
    let outcome = route("C", "C", TrainColor::Red).unwrap();
    assert_eq!(stations(&outcome), ["C"]);
}

#[test]
fn green_only_station_rejects_red_train() {
    let err = route("A", "I", TrainColor::Red).unwrap_err();
    match err {
        RouteError::InvalidCombination { from, to, color } => {
            assert_eq!(from, name("A"));
            assert_eq!(to, name("I"));
            assert_eq!(color, TrainColor::Red);
        }
        other => panic!("expected invalid combination, got {other:?}"),
    }
}

#[test]
fn incompatible_initial_station_rejected() {
    let err = route("H", "F", TrainColor::Green).unwrap_err();
    assert!(matches!(err, RouteError::InvalidCombination { .. }));
}

#[test]
fn network_without_forks_has_no_route() {
    let network = Network::new(vec![
        Station::new(name("A"), TrainColor::Unrestricted),
        Station::new(name("B"), TrainColor::Unrestricted),
    ]);
    let mut query = Query::new(name("A"), name("B"), TrainColor::Unrestricted);

    let err = RouteRequest {
        network: &network,
        query: &mut query,
        terminal: None,
        verbosity: Verbosity::Quiet,
    }
    .handle()
    .unwrap_err();

    assert!(matches!(err, RouteError::InvalidCombination { .. }));
}

#[test]
fn terminal_override_changes_ordering() {
    let network = reference_network();
    let mut query = Query::new(name("A"), name("F"), TrainColor::Unrestricted);

    // F is no longer moved last, so it stays right after C on both
    // candidates and the tie goes to the later fork
    let outcome = RouteRequest {
        network: &network,
        query: &mut query,
        terminal: Some(name("E")),
        verbosity: Verbosity::Quiet,
    }
    .handle()
    .unwrap();

    assert_eq!(stations(&outcome), ["A", "B", "C", "F"]);
}

// =============================================================================
// Sources
// =============================================================================

#[test]
fn file_network_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("net.json");
    fs::copy(reference_document(), &path).unwrap();

    let network = FileNetwork::new(&path);
    let mut query = Query::new(name("A"), name("F"), TrainColor::Red);
    let outcome = RouteRequest {
        network: &network,
        query: &mut query,
        terminal: None,
        verbosity: Verbosity::Quiet,
    }
    .handle()
    .unwrap();

    assert_eq!(outcome.route.to_string(), "A -> B -> C -> H -> F");
}

#[test]
fn missing_network_is_load_failure() {
    let temp = TempDir::new().unwrap();
    let network = FileNetwork::new(temp.path().join("missing.json"));
    let mut query = Query::new(name("A"), name("F"), TrainColor::Red);

    let err = RouteRequest {
        network: &network,
        query: &mut query,
        terminal: None,
        verbosity: Verbosity::Quiet,
    }
    .handle()
    .unwrap_err();

    assert!(matches!(err, RouteError::Load(NetworkError::ReadError { .. })));
}

#[test]
fn malformed_network_is_load_failure() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "[{ \"name\": \"A\" ").unwrap();

    let network = FileNetwork::new(&path);
    let mut query = Query::new(name("A"), name("F"), TrainColor::Red);
    let err = RouteRequest {
        network: &network,
        query: &mut query,
        terminal: None,
        verbosity: Verbosity::Quiet,
    }
    .handle()
    .unwrap_err();

    assert!(matches!(err, RouteError::Load(NetworkError::ParseError { .. })));
}

#[test]
fn prompted_query_with_retries() {
    let network = reference_network();
    let mut output = Vec::new();
    let prompter = Prompter::new(&b"Z\nf\nb\nblue\ngreen\n"[..], &mut output, true);
    let mut query = QueryPrompt::new(prompter);

    let outcome = RouteRequest {
        network: &network,
        query: &mut query,
        terminal: None,
        verbosity: Verbosity::Quiet,
    }
    .handle()
    .unwrap();
    drop(query);

    assert_eq!(stations(&outcome), ["F", "I", "G", "C", "B"]);

    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains("Enter initial station [ Valid values: A - B - C - D - E - G - H - I - F ] : "));
    assert!(shown.contains("Enter train color [ Valid values: RED - GREEN - WITHOUT COLOR ] : "));
    assert_eq!(shown.matches("Invalid value! Try again!").count(), 2);
}

#[test]
fn closed_input_is_input_failure() {
    let network = reference_network();
    let prompter = Prompter::new(&b"A\n"[..], Vec::new(), true);
    let mut query = QueryPrompt::new(prompter);

    let err = RouteRequest {
        network: &network,
        query: &mut query,
        terminal: None,
        verbosity: Verbosity::Quiet,
    }
    .handle()
    .unwrap_err();

    assert!(matches!(
        err,
        RouteError::Input(QueryError::Prompt(PromptError::Cancelled))
    ));
}

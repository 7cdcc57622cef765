//! route::select
//!
//! Shortest-route selection.
//!
//! # Rules
//!
//! - A candidate qualifies when it contains both endpoints
//! - Distance is `|last(to) - last(from)|`, positions found by a forward
//!   scan that keeps the last match
//! - The minimum distance wins; on a tie the later candidate replaces the
//!   earlier one
//! - No qualifying candidate yields `None`, never an empty route

use crate::core::types::StationName;

use super::Route;

/// Position-count distance between `from` and `to` on `route`.
///
/// Returns `None` if either station is missing.
pub fn distance(route: &Route, from: &StationName, to: &StationName) -> Option<usize> {
    let start = route.last_position(from)?;
    let end = route.last_position(to)?;
    Some(start.abs_diff(end))
}

/// Pick the shortest candidate connecting `from` and `to`.
///
/// # Example
///
/// ```
/// use forkroute::core::types::StationName;
/// use forkroute::route::{shortest, Route};
///
/// fn name(s: &str) -> StationName {
///     StationName::new(s).unwrap()
/// }
/// fn route(list: &[&str]) -> Route {
///     list.iter().map(|s| name(s)).collect()
/// }
///
/// let candidates = vec![route(&["A", "B", "F"]), route(&["A", "X", "F"])];
///
/// // Equal distance: the later candidate wins.
/// let best = shortest(&candidates, &name("A"), &name("F")).unwrap();
/// assert_eq!(best, &candidates[1]);
///
/// assert!(shortest(&candidates, &name("A"), &name("Q")).is_none());
/// ```
pub fn shortest<'a>(routes: &'a [Route], from: &StationName, to: &StationName) -> Option<&'a Route> {
    let mut best: Option<(usize, &Route)> = None;

    for route in routes {
        if !route.contains(to) {
            continue;
        }
        let Some(current) = distance(route, from, to) else {
            continue;
        };

        match best {
            Some((best_distance, _)) if current > best_distance => {}
            _ => best = Some((current, route)),
        }
    }

    best.map(|(_, route)| route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StationName {
        StationName::new(s).unwrap()
    }

    fn route(list: &[&str]) -> Route {
        list.iter().map(|s| name(s)).collect()
    }

    #[test]
    fn shortest_of_two() {
        let routes = vec![
            route(&["A", "B", "C", "D", "E", "F"]),
            route(&["A", "B", "C", "G", "H", "I", "F"]),
        ];

        let best = shortest(&routes, &name("A"), &name("F")).unwrap();

        assert_eq!(best, &route(&["A", "B", "C", "D", "E", "F"]));
    }

    #[test]
    fn later_route_wins_tie() {
        let routes = vec![
            route(&["A", "B", "C", "D", "E", "F"]),
            route(&["A", "B", "C", "G", "I", "F"]),
        ];

        let best = shortest(&routes, &name("A"), &name("F")).unwrap();

        assert_eq!(best, &routes[1]);
    }

    #[test]
    fn routes_without_destination_skipped() {
        let routes = vec![route(&["A", "B", "C", "D"]), route(&["A", "B", "C", "H", "F"])];

        let best = shortest(&routes, &name("A"), &name("D")).unwrap();

        assert_eq!(best, &routes[0]);
    }

    #[test]
    fn routes_without_origin_skipped() {
        let routes = vec![route(&["A", "F"]), route(&["H", "X", "Y", "F"])];

        let best = shortest(&routes, &name("H"), &name("F")).unwrap();

        assert_eq!(best, &routes[1]);
    }

    #[test]
    fn no_route_is_none() {
        let routes = vec![route(&["A", "B", "C", "H", "F"])];
        assert!(shortest(&routes, &name("A"), &name("I")).is_none());
        assert!(shortest(&[], &name("A"), &name("F")).is_none());
    }

    #[test]
    fn zero_distance_is_a_valid_route() {
        let routes = vec![route(&["A", "B", "C"]), route(&["A", "B"])];

        let best = shortest(&routes, &name("B"), &name("B")).unwrap();

        assert_eq!(best, &routes[1]);
    }

    #[test]
    fn distance_is_symmetric() {
        let r = route(&["A", "B", "C", "D"]);
        assert_eq!(distance(&r, &name("A"), &name("D")), Some(3));
        assert_eq!(distance(&r, &name("D"), &name("A")), Some(3));
        assert_eq!(distance(&r, &name("A"), &name("Z")), None);
    }

    #[test]
    fn distance_uses_last_occurrence() {
        let r = route(&["A", "B", "A", "C"]);
        assert_eq!(distance(&r, &name("A"), &name("C")), Some(1));
    }
}

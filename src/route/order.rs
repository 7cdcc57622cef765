//! route::order
//!
//! Candidate normalization: the network's terminal station goes last.
//!
//! The terminal is located by a linear scan (first occurrence), so the
//! result does not depend on the candidate being sorted. A candidate that
//! does not contain the terminal is left unchanged.

use crate::core::types::StationName;

use super::Route;

/// Move `terminal` to the end of `route`, keeping the relative order of
/// every other station.
///
/// Returns `false` when the route does not contain the terminal.
///
/// # Example
///
/// ```
/// use forkroute::core::types::StationName;
/// use forkroute::route::{move_terminal_last, Route};
///
/// let name = |s: &str| StationName::new(s).unwrap();
/// let mut route: Route = ["A", "F", "D"].into_iter().map(name).collect();
///
/// assert!(move_terminal_last(&mut route, &name("F")));
/// assert_eq!(route.to_string(), "A -> D -> F");
/// ```
pub fn move_terminal_last(route: &mut Route, terminal: &StationName) -> bool {
    let Some(index) = route.first_position(terminal) else {
        return false;
    };

    let stations = route.as_mut_vec();
    let station = stations.remove(index);
    stations.push(station);
    true
}

/// Apply [`move_terminal_last`] to every candidate.
pub fn order_routes(routes: &mut [Route], terminal: &StationName) {
    for route in routes {
        move_terminal_last(route, terminal);
    }
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
    fn routes_ordered_with_terminal_last() {
        let mut routes = vec![
            route(&["A", "B", "C", "F", "D", "E"]),
            route(&["A", "B", "C", "F", "G", "H", "I"]),
        ];

        order_routes(&mut routes, &name("F"));

        assert_eq!(
            routes,
            vec![
                route(&["A", "B", "C", "D", "E", "F"]),
                route(&["A", "B", "C", "G", "H", "I", "F"]),
            ]
        );
    }

    #[test]
    fn unsorted_names_handled() {
        // Names out of lexical order must not confuse the lookup.
        let mut r = route(&["Zeta", "Alpha", "Omega", "Beta"]);
        assert!(move_terminal_last(&mut r, &name("Alpha")));
        assert_eq!(r, route(&["Zeta", "Omega", "Beta", "Alpha"]));
    }

    #[test]
    fn absent_terminal_leaves_route_unchanged() {
        let mut r = route(&["A", "B", "C"]);
        assert!(!move_terminal_last(&mut r, &name("F")));
        assert_eq!(r, route(&["A", "B", "C"]));
    }

    #[test]
    fn terminal_already_last() {
        let mut r = route(&["A", "B", "F"]);
        assert!(move_terminal_last(&mut r, &name("F")));
        assert_eq!(r, route(&["A", "B", "F"]));
    }

    #[test]
    fn only_first_occurrence_moves() {
        let mut r = route(&["F", "A", "F", "B"]);
        move_terminal_last(&mut r, &name("F"));
        assert_eq!(r, route(&["A", "F", "B", "F"]));
    }
}

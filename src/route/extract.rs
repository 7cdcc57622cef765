//! route::extract
//!
//! Sub-route extraction between two endpoints, oriented in travel direction.

use crate::core::types::StationName;

use super::Route;

/// Slice `route` between `from` and `to` (inclusive), reading from `from`.
///
/// Endpoints are located by their first occurrence. When `from` comes after
/// `to` the slice is reversed. Returns `None` if either endpoint is missing.
///
/// # Example
///
/// ```
/// use forkroute::core::types::StationName;
/// use forkroute::route::{sub_route, Route};
///
/// let name = |s: &str| StationName::new(s).unwrap();
/// let route: Route = ["A", "B", "C", "G", "I", "F"].into_iter().map(name).collect();
///
/// let forward = sub_route(&route, &name("B"), &name("G")).unwrap();
/// assert_eq!(forward.to_string(), "B -> C -> G");
///
/// let backward = sub_route(&route, &name("F"), &name("B")).unwrap();
/// assert_eq!(backward.to_string(), "F -> I -> G -> C -> B");
/// ```
pub fn sub_route(route: &Route, from: &StationName, to: &StationName) -> Option<Route> {
    let start = route.first_position(from)?;
    let end = route.first_position(to)?;
    let stations = route.stations();

    let extracted = if start <= end {
        stations[start..=end].to_vec()
    } else {
        stations[end..=start].iter().rev().cloned().collect()
    };

    Some(Route::new(extracted))
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
    fn forward_slice() {
        let r = route(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(
            sub_route(&r, &name("A"), &name("F")).unwrap(),
            route(&["A", "B", "C", "D", "E", "F"])
        );
        assert_eq!(
            sub_route(&r, &name("B"), &name("D")).unwrap(),
            route(&["B", "C", "D"])
        );
    }

    #[test]
    fn backward_slice_is_reversed() {
        let r = route(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(
            sub_route(&r, &name("F"), &name("D")).unwrap(),
            route(&["F", "E", "D"])
        );
    }

    #[test]
    fn same_endpoint_is_single_station() {
        let r = route(&["A", "B", "C"]);
        assert_eq!(sub_route(&r, &name("B"), &name("B")).unwrap(), route(&["B"]));
    }

    #[test]
    fn missing_endpoint_is_none() {
        let r = route(&["A", "B", "C"]);
        assert!(sub_route(&r, &name("A"), &name("Z")).is_none());
        assert!(sub_route(&r, &name("Z"), &name("A")).is_none());
    }

    #[test]
    fn endpoint_swap_reverses() {
        let r = route(&["A", "B", "C", "G", "I", "F"]);
        let forward = sub_route(&r, &name("B"), &name("I")).unwrap();
        let backward = sub_route(&r, &name("I"), &name("B")).unwrap();
        assert_eq!(forward.reversed(), backward);
    }
}

//! Residual edge predicates and the residual graph views built from them.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use fg_graph::{Always, FilteredGraph, GraphBase, Predicate};

use crate::capacity::CapacityMap;

/// Accepts edges whose residual capacity is still positive.
#[derive(Debug)]
pub struct ResidualEdgePredicate<'a, E> {
    residuals: &'a CapacityMap<E>,
}

impl<'a, E> ResidualEdgePredicate<'a, E> {
    pub fn new(residuals: &'a CapacityMap<E>) -> Self {
        Self { residuals }
    }
}

impl<E: Eq + Hash + Clone + Debug> Predicate<E> for ResidualEdgePredicate<'_, E> {
    fn test(&self, e: &E) -> bool {
        self.residuals.residual(e).is_some_and(|r| r > 0.0)
    }
}

/// Accepts edges whose paired reverse edge has positive residual capacity.
///
/// Every tested edge must have a reverse edge; testing one that does not is a
/// programming error and panics.
#[derive(Debug)]
pub struct ReversedResidualEdgePredicate<'a, E> {
    residuals: &'a CapacityMap<E>,
    reversed_edges: &'a HashMap<E, E>,
}

impl<'a, E> ReversedResidualEdgePredicate<'a, E> {
    pub fn new(residuals: &'a CapacityMap<E>, reversed_edges: &'a HashMap<E, E>) -> Self {
        Self {
            residuals,
            reversed_edges,
        }
    }
}

impl<E: Eq + Hash + Clone + Debug> Predicate<E> for ReversedResidualEdgePredicate<'_, E> {
    fn test(&self, e: &E) -> bool {
        let reversed = self
            .reversed_edges
            .get(e)
            .unwrap_or_else(|| panic!("edge {e:?} has no reversed edge"));
        self.residuals.residual(reversed).is_some_and(|r| r > 0.0)
    }
}

/// All vertices of `G`, and the edges that can still carry flow.
pub type ResidualGraph<'a, G> =
    FilteredGraph<'a, G, Always, ResidualEdgePredicate<'a, <G as GraphBase>::Edge>>;

/// All vertices of `G`, and the edges whose reverse can still carry flow.
pub type ReversedResidualGraph<'a, G> =
    FilteredGraph<'a, G, Always, ReversedResidualEdgePredicate<'a, <G as GraphBase>::Edge>>;

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::Tolerances;
    use fg_graph::prelude::*;
    use fg_graph::{DiGraph, SEdge};

    #[test]
    fn residual_predicate_tracks_map() {
        let edges = [SEdge::new(0, 1), SEdge::new(1, 0)];
        let mut map = CapacityMap::seed(edges.iter(), |e| if *e.source() == 0 { 2.0 } else { 0.0 })
            .unwrap();

        let forward = SEdge::new(0, 1);
        let backward = SEdge::new(1, 0);
        assert!(ResidualEdgePredicate::new(&map).test(&forward));
        assert!(!ResidualEdgePredicate::new(&map).test(&backward));
        assert!(!ResidualEdgePredicate::new(&map).test(&SEdge::new(5, 6)));

        map.push(&forward, 2.0, &Tolerances::default());
        map.cancel(&backward, 2.0);
        assert!(!ResidualEdgePredicate::new(&map).test(&forward));
        assert!(ResidualEdgePredicate::new(&map).test(&backward));
    }

    #[test]
    fn reversed_predicate_reads_the_pair() {
        let forward = SEdge::new('a', 'b');
        let backward = SEdge::new('b', 'a');
        let edges = [forward.clone(), backward.clone()];
        let map = CapacityMap::seed(edges.iter(), |e| if *e == forward { 0.0 } else { 1.0 }).unwrap();
        let reversed = HashMap::from([
            (forward.clone(), backward.clone()),
            (backward.clone(), forward.clone()),
        ]);

        let pred = ReversedResidualEdgePredicate::new(&map, &reversed);
        assert!(pred.test(&forward));
        assert!(!pred.test(&backward));
    }

    #[test]
    #[should_panic(expected = "has no reversed edge")]
    fn reversed_predicate_panics_without_pair() {
        let map = CapacityMap::<SEdge<u8>>::new();
        let reversed = HashMap::new();
        ReversedResidualEdgePredicate::new(&map, &reversed).test(&SEdge::new(1, 2));
    }

    #[test]
    fn residual_view_hides_saturated_edges() {
        let graph = DiGraph::from_edges([SEdge::new(0, 1), SEdge::new(1, 2)]);
        let map = CapacityMap::seed(graph.edges(), |e| if *e.source() == 0 { 1.0 } else { 0.0 })
            .unwrap();

        let view: ResidualGraph<'_, DiGraph<i32, SEdge<i32>>> =
            FilteredGraph::new(&graph, Always, ResidualEdgePredicate::new(&map));
        assert_eq!(view.vertex_count(), 3);
        assert_eq!(view.edge_count(), 1);
        assert!(view.is_out_edges_empty(&1).unwrap());
    }
}

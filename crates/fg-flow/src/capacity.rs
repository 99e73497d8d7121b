//! Residual capacity bookkeeping.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use fg_core::{Real, Tolerances, ensure_finite};

use crate::error::{FlowError, FlowResult};

/// Original and residual capacity per edge.
///
/// Residual values start at the original capacity and only change through
/// [`push`](Self::push) and [`cancel`](Self::cancel). They never go below zero
/// and are kept (not removed) when they reach zero.
#[derive(Debug, Clone)]
pub struct CapacityMap<E> {
    capacities: HashMap<E, Real>,
    residuals: HashMap<E, Real>,
}

impl<E> Default for CapacityMap<E> {
    fn default() -> Self {
        Self {
            capacities: HashMap::new(),
            residuals: HashMap::new(),
        }
    }
}

impl<E: Eq + Hash + Clone + Debug> CapacityMap<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `capacity(e)` for every edge and build the map.
    ///
    /// All values are validated before the map is built, so a failure
    /// produces no partially seeded map.
    pub fn seed<'e, I, F>(edges: I, mut capacity: F) -> FlowResult<Self>
    where
        I: IntoIterator<Item = &'e E>,
        E: 'e,
        F: FnMut(&E) -> Real,
    {
        let mut capacities = HashMap::new();
        for e in edges {
            let c = capacity(e);
            if c < 0.0 {
                return Err(FlowError::NegativeCapacity {
                    edge: format!("{e:?}"),
                    capacity: c,
                });
            }
            ensure_finite(c, "edge capacity")?;
            capacities.insert(e.clone(), c);
        }

        Ok(Self {
            residuals: capacities.clone(),
            capacities,
        })
    }

    /// Seeded capacity of `e`.
    pub fn capacity(&self, e: &E) -> Option<Real> {
        self.capacities.get(e).copied()
    }

    /// Current residual capacity of `e`.
    pub fn residual(&self, e: &E) -> Option<Real> {
        self.residuals.get(e).copied()
    }

    /// Flow committed on `e`: capacity minus residual.
    ///
    /// Negative when more flow was cancelled through `e` than was pushed on it.
    pub fn flow(&self, e: &E) -> Option<Real> {
        Some(self.capacity(e)? - self.residual(e)?)
    }

    /// Consume `delta` of the residual capacity of `e`.
    ///
    /// A remainder that `tol` deems rounding noise is stored as exactly zero,
    /// so a saturated edge leaves the residual graph.
    pub(crate) fn push(&mut self, e: &E, delta: Real, tol: &Tolerances) {
        if let Some(r) = self.residuals.get_mut(e) {
            debug_assert!(
                *r >= delta || tol.approx_eq(*r, delta),
                "push exceeds residual capacity of {e:?}"
            );
            let left = *r - delta;
            *r = if tol.is_negligible(left, *r) { 0.0 } else { left.max(0.0) };
        }
    }

    /// Return `delta` of residual capacity to `e`.
    pub(crate) fn cancel(&mut self, e: &E, delta: Real) {
        if let Some(r) = self.residuals.get_mut(e) {
            *r += delta;
        }
    }

    /// Residual capacities, keyed by edge.
    pub fn residuals(&self) -> &HashMap<E, Real> {
        &self.residuals
    }

    pub fn len(&self) -> usize {
        self.residuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::FgError;

    #[test]
    fn seed_copies_capacities_into_residuals() {
        let edges = ["a", "b"];
        let map = CapacityMap::seed(edges.iter(), |e| if *e == "a" { 3.0 } else { 0.0 }).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.capacity(&"a"), Some(3.0));
        assert_eq!(map.residual(&"a"), Some(3.0));
        assert_eq!(map.flow(&"b"), Some(0.0));
        assert_eq!(map.residual(&"c"), None);
    }

    #[test]
    fn negative_capacity_leaves_nothing_seeded() {
        let edges = ["a", "b", "c"];
        let err = CapacityMap::seed(edges.iter(), |e| if *e == "b" { -1.0 } else { 2.0 })
            .unwrap_err();

        assert_eq!(
            err,
            FlowError::NegativeCapacity {
                edge: "\"b\"".into(),
                capacity: -1.0
            }
        );
    }

    #[test]
    fn non_finite_capacity_is_rejected() {
        let edges = [1];
        let err = CapacityMap::seed(edges.iter(), |_| Real::NAN).unwrap_err();
        assert!(matches!(err, FlowError::Core(FgError::NonFinite { .. })));
    }

    #[test]
    fn push_and_cancel_adjust_residuals() {
        let edges = [1, 2];
        let mut map = CapacityMap::seed(edges.iter(), |_| 5.0).unwrap();

        map.push(&1, 5.0, &Tolerances::default());
        map.cancel(&2, 5.0);

        assert_eq!(map.residual(&1), Some(0.0));
        assert_eq!(map.flow(&1), Some(5.0));
        assert_eq!(map.residual(&2), Some(10.0));
        assert_eq!(map.flow(&2), Some(-5.0));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn rounding_noise_saturates_an_edge() {
        let edges = ["a"];
        let mut map = CapacityMap::seed(edges.iter(), |_| 0.1 + 0.2).unwrap();
        let tol = Tolerances::default();

        map.push(&"a", 0.1, &tol);
        map.push(&"a", 0.2, &tol);

        assert_eq!(map.residual(&"a"), Some(0.0));
        assert_eq!(map.flow(&"a"), Some(0.1 + 0.2));
    }

    #[test]
    fn real_remainders_survive_a_push() {
        let edges = ["a"];
        let mut map = CapacityMap::seed(edges.iter(), |_| 1.0).unwrap();

        map.push(&"a", 0.999, &Tolerances::default());

        let left = map.residual(&"a").unwrap();
        assert!(left > 0.0 && Tolerances::default().approx_eq(left, 0.001));
    }
}

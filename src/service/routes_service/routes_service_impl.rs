use super::{Route, RoutesService};
use crate::error::Error;
use anyhow::anyhow;
use std::collections::{BTreeSet, HashMap};

pub struct RoutesServiceImpl {
    /// from -> to -> price
    routes: HashMap<String, HashMap<String, f64>>,
}

impl RoutesServiceImpl {
    ///
    /// Builds bidirectional lookup from the given routes.
    /// When the same pair is registered twice the first price is kept.
    ///
    /// ### Errors
    /// - station name is blank
    /// - price is negative or not finite
    ///
    pub fn new(routes: Vec<Route>) -> anyhow::Result<Self> {
        let mut lookup: HashMap<String, HashMap<String, f64>> = HashMap::new();

        for Route {
            from,
            to,
            base_price,
        } in routes
        {
            if from.trim().is_empty() || to.trim().is_empty() {
                return Err(anyhow!("route station name cannot be blank"));
            }
            if !base_price.is_finite() || base_price < 0.0 {
                return Err(anyhow!(
                    "route from {from} to {to} has invalid price {base_price}"
                ));
            }

            lookup
                .entry(from.clone())
                .or_default()
                .entry(to.clone())
                .or_insert(base_price);
            lookup
                .entry(to)
                .or_default()
                .entry(from)
                .or_insert(base_price);
        }

        tracing::debug!(stations = lookup.len(), "created routes catalog");

        Ok(Self { routes: lookup })
    }
}

impl RoutesService for RoutesServiceImpl {
    fn all_stations(&self) -> BTreeSet<String> {
        self.routes.keys().cloned().collect()
    }

    fn find_route(&self, from: &str, to: &str) -> Option<f64> {
        self.routes
            .get(from)
            .and_then(|destinations| destinations.get(to))
            .copied()
    }

    fn calculate_price(&self, from: &str, to: &str) -> Result<f64, Error> {
        self.find_route(from, to).ok_or_else(|| Error::RouteNotExist {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

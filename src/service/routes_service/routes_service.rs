use crate::error::Error;
use std::collections::BTreeSet;

///
/// Read-only catalog of stations and direct route prices.
///
/// Catalog is immutable after construction, so lookups are synchronous
/// and may be performed while holding other locks.
///
#[cfg_attr(test, mockall::automock)]
pub trait RoutesService: Send + Sync {
    ///
    /// ### Returns
    /// Names of all stations appearing in any registered route
    ///
    fn all_stations(&self) -> BTreeSet<String>;

    ///
    /// ### Returns
    /// Base price of the direct route or None when
    /// stations are not connected
    ///
    fn find_route(&self, from: &str, to: &str) -> Option<f64>;

    ///
    /// ### Errors
    /// - [Error::RouteNotExist] when
    ///     - there is no direct route between stations
    ///
    fn calculate_price(&self, from: &str, to: &str) -> Result<f64, Error>;
}

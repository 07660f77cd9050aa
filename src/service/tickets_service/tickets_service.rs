use super::Ticket;
use crate::{dto::input, error::Error};
use axum::async_trait;
use std::collections::BTreeSet;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Books a seat for the user on a direct route.
    ///
    /// ### Returns
    /// Purchased ticket with the price of the route
    /// and the lowest free seat of the less occupied section
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - from, to or user email is blank
    /// - [Error::TicketAlreadyPurchased] when
    ///     - user already holds a ticket with the same from and to
    /// - [Error::RouteNotExist] when
    ///     - stations are not connected by a direct route
    /// - [Error::NoSeatsAvailable] when
    ///     - both sections are full
    ///
    async fn purchase_ticket(&self, purchase: input::TicketPurchase) -> Result<Ticket, Error>;

    ///
    /// ### Returns
    /// Ticket or None when ticket does not exist
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - id is blank
    ///
    async fn find_ticket(&self, id: &str) -> Result<Option<Ticket>, Error>;

    ///
    /// ### Returns
    /// All tickets seated in the section, in no particular order
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - section is not exactly "A" or "B"
    ///
    async fn find_tickets_by_section(&self, section: &str) -> Result<Vec<Ticket>, Error>;

    ///
    /// Cancels ticket and frees its seat.
    /// Removing ticket that does not exist is not an error.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - id is blank
    ///
    async fn remove_ticket(&self, id: &str) -> Result<(), Error>;

    ///
    /// Moves ticket to the requested seat.
    ///
    /// ### Returns
    /// Updated ticket or None when ticket does not exist
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - id is blank
    ///     - section is not exactly "A" or "B"
    /// - [Error::ValidationSeatNumberOutOfRange] when
    ///     - seat number is outside of 1..=seats_per_section
    /// - [Error::SeatOccupied] when
    ///     - seat is held by another ticket
    ///
    async fn modify_seat(
        &self,
        id: &str,
        modification: input::SeatModification,
    ) -> Result<Option<Ticket>, Error>;

    async fn all_stations(&self) -> BTreeSet<String>;
}

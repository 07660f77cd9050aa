use super::{ledger::Ledger, Ticket, TicketsService, TicketsServiceConfig};
use crate::{
    dto::{inoutput::Section, input},
    error::Error,
    service::routes_service::RoutesService,
};
use axum::async_trait;
use std::{collections::BTreeSet, sync::Arc};
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    routes_service: Arc<dyn RoutesService>,

    /// Every operation holds the lock for its whole read-decide-write sequence
    ledger: Mutex<Ledger>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, routes_service: Arc<dyn RoutesService>) -> Self {
        let ledger = Ledger::new();
        let ledger = Mutex::new(ledger);

        Self {
            config,
            routes_service,
            ledger,
        }
    }

    fn validate_purchase(purchase: &input::TicketPurchase) -> Result<(), Error> {
        if purchase.from.trim().is_empty() {
            return Err(Error::Validation("departure station is required"));
        }
        if purchase.to.trim().is_empty() {
            return Err(Error::Validation("destination station is required"));
        }
        if purchase.user.email.trim().is_empty() {
            return Err(Error::Validation("user email is required"));
        }

        Ok(())
    }

    fn validate_id(id: &str) -> Result<(), Error> {
        if id.trim().is_empty() {
            return Err(Error::Validation("ticket id cannot be blank"));
        }

        Ok(())
    }

    fn validate_seat_number(&self, seat_number: i64) -> Result<u32, Error> {
        let max = self.config.seats_per_section;

        u32::try_from(seat_number)
            .ok()
            .filter(|seat_number| (1..=max).contains(seat_number))
            .ok_or(Error::ValidationSeatNumberOutOfRange { seat_number, max })
    }

    ///
    /// Ids are generated as UUIDs, so anything else cannot match a ticket
    ///
    fn parse_id(id: &str) -> Option<Uuid> {
        Uuid::parse_str(id).ok()
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn purchase_ticket(&self, purchase: input::TicketPurchase) -> Result<Ticket, Error> {
        tracing::info!("purchasing ticket");
        tracing::trace!(?purchase);

        Self::validate_purchase(&purchase)?;

        let input::TicketPurchase { from, to, user } = purchase;
        let seats_per_section = self.config.seats_per_section;

        let mut ledger = self.ledger.lock().await;

        if ledger.has_booking(&user.email, &from, &to) {
            return Err(Error::TicketAlreadyPurchased);
        }

        let price = self.routes_service.calculate_price(&from, &to)?;

        let section = ledger
            .choose_section(seats_per_section)
            .ok_or(Error::NoSeatsAvailable)?;
        let seat_number = ledger
            .first_free_seat(section, seats_per_section)
            .ok_or(Error::NoSeatsAvailable)?;

        let ticket = Ticket {
            id: Uuid::new_v4(),
            from,
            to,
            user,
            price,
            section,
            seat_number,
        };
        ledger.insert(ticket.clone())?;

        tracing::info!(id = %ticket.id, %section, seat_number, "purchased ticket");

        Ok(ticket)
    }

    async fn find_ticket(&self, id: &str) -> Result<Option<Ticket>, Error> {
        tracing::info!(id, "finding ticket");

        Self::validate_id(id)?;

        let Some(id) = Self::parse_id(id) else {
            tracing::info!("ticket not found");
            return Ok(None);
        };

        let ticket = self.ledger.lock().await.ticket(&id).cloned();
        tracing::info!(found = ticket.is_some(), "found ticket");

        Ok(ticket)
    }

    async fn find_tickets_by_section(&self, section: &str) -> Result<Vec<Ticket>, Error> {
        tracing::info!(section, "finding tickets by section");

        let section = Section::parse(section)?;

        let tickets = self.ledger.lock().await.tickets_in_section(section);
        tracing::info!(count = tickets.len(), "found tickets");

        Ok(tickets)
    }

    async fn remove_ticket(&self, id: &str) -> Result<(), Error> {
        tracing::info!(id, "removing ticket");

        Self::validate_id(id)?;

        let Some(id) = Self::parse_id(id) else {
            tracing::info!("ticket not exist, nothing to remove");
            return Ok(());
        };

        match self.ledger.lock().await.remove(&id)? {
            Some(ticket) => tracing::info!(
                section = %ticket.section,
                seat_number = ticket.seat_number,
                "removed ticket"
            ),
            None => tracing::info!("ticket not exist, nothing to remove"),
        }

        Ok(())
    }

    async fn modify_seat(
        &self,
        id: &str,
        modification: input::SeatModification,
    ) -> Result<Option<Ticket>, Error> {
        tracing::info!(id, "modifying seat");
        tracing::trace!(?modification);

        Self::validate_id(id)?;
        let section = Section::parse(&modification.section)?;
        let seat_number = self.validate_seat_number(modification.seat_number)?;

        let Some(id) = Self::parse_id(id) else {
            tracing::info!("ticket not found");
            return Ok(None);
        };

        let ticket = self
            .ledger
            .lock()
            .await
            .move_ticket(&id, section, seat_number)?;

        match &ticket {
            Some(_) => tracing::info!(%section, seat_number, "modified seat"),
            None => tracing::info!("ticket not found"),
        }

        Ok(ticket)
    }

    async fn all_stations(&self) -> BTreeSet<String> {
        self.routes_service.all_stations()
    }
}

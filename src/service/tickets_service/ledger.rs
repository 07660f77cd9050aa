//!
//! In-memory bookkeeping of live tickets and seat occupancy.
//!
//! Ledger itself is not synchronized. Owner must serialize access,
//! so every check-then-act sequence observes a consistent state.
//!

use super::Ticket;
use crate::{dto::inoutput::Section, error::Error};
use anyhow::anyhow;
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Hash)]
struct BookingKey {
    email: String,
    from: String,
    to: String,
}

impl BookingKey {
    fn new(email: &str, from: &str, to: &str) -> Self {
        Self {
            email: email.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn of(ticket: &Ticket) -> Self {
        Self::new(&ticket.user.email, &ticket.from, &ticket.to)
    }
}

pub struct Ledger {
    tickets: HashMap<Uuid, Ticket>,

    /// section -> seat number -> id of the ticket holding the seat
    occupied_seats: HashMap<Section, BTreeMap<u32, Uuid>>,

    /// (user email, from, to) -> ticket id
    bookings: HashMap<BookingKey, Uuid>,
}

impl Ledger {
    pub fn new() -> Self {
        let occupied_seats = Section::iter()
            .map(|section| (section, BTreeMap::new()))
            .collect();

        Self {
            tickets: HashMap::new(),
            occupied_seats,
            bookings: HashMap::new(),
        }
    }

    pub fn has_booking(&self, email: &str, from: &str, to: &str) -> bool {
        self.bookings.contains_key(&BookingKey::new(email, from, to))
    }

    pub fn occupied_count(&self, section: Section) -> usize {
        self.occupied_seats.get(&section).map_or(0, BTreeMap::len)
    }

    pub fn seat_holder(&self, section: Section, seat_number: u32) -> Option<Uuid> {
        self.occupied_seats
            .get(&section)
            .and_then(|seats| seats.get(&seat_number))
            .copied()
    }

    ///
    /// Picks the less occupied section, A on a tie.
    ///
    /// ### Returns
    /// None when both sections are full
    ///
    pub fn choose_section(&self, seats_per_section: u32) -> Option<Section> {
        let capacity = seats_per_section as usize;
        let count_a = self.occupied_count(Section::A);
        let count_b = self.occupied_count(Section::B);

        if count_a >= capacity && count_b >= capacity {
            return None;
        }

        if count_a <= count_b {
            Some(Section::A)
        } else {
            Some(Section::B)
        }
    }

    ///
    /// ### Returns
    /// Lowest seat number not occupied in the section
    ///
    pub fn first_free_seat(&self, section: Section, seats_per_section: u32) -> Option<u32> {
        (1..=seats_per_section)
            .find(|seat_number| self.seat_holder(section, *seat_number).is_none())
    }

    pub fn ticket(&self, id: &Uuid) -> Option<&Ticket> {
        self.tickets.get(id)
    }

    pub fn tickets_in_section(&self, section: Section) -> Vec<Ticket> {
        self.tickets
            .values()
            .filter(|ticket| ticket.section == section)
            .cloned()
            .collect()
    }

    ///
    /// Stores new ticket and occupies its seat.
    ///
    /// ### Errors
    /// - [Error::UnexpectedError] when
    ///     - ticket with the same id is already stored
    ///     - seat of the ticket is already occupied
    ///
    pub fn insert(&mut self, ticket: Ticket) -> Result<(), Error> {
        if self.tickets.contains_key(&ticket.id) {
            return Err(anyhow!("ticket {} already stored", ticket.id).into());
        }

        self.occupy_seat(ticket.section, ticket.seat_number, ticket.id)?;
        self.bookings.insert(BookingKey::of(&ticket), ticket.id);
        self.tickets.insert(ticket.id, ticket);

        Ok(())
    }

    ///
    /// Deletes ticket and frees its seat.
    ///
    /// ### Returns
    /// Removed ticket or None when ticket did not exist
    ///
    pub fn remove(&mut self, id: &Uuid) -> Result<Option<Ticket>, Error> {
        let Some(ticket) = self.tickets.get(id) else {
            return Ok(None);
        };

        let (section, seat_number) = (ticket.section, ticket.seat_number);
        self.release_seat(section, seat_number, *id)?;

        let ticket = self
            .tickets
            .remove(id)
            .ok_or_else(|| anyhow!("ticket {id} disappeared while removing"))?;
        self.bookings.remove(&BookingKey::of(&ticket));

        Ok(Some(ticket))
    }

    ///
    /// Moves ticket to another seat.
    /// Moving ticket to the seat it already holds changes nothing.
    ///
    /// ### Returns
    /// Updated ticket or None when ticket does not exist
    ///
    /// ### Errors
    /// - [Error::SeatOccupied] when
    ///     - seat is held by another ticket
    ///
    pub fn move_ticket(
        &mut self,
        id: &Uuid,
        section: Section,
        seat_number: u32,
    ) -> Result<Option<Ticket>, Error> {
        let Some(ticket) = self.tickets.get(id) else {
            return Ok(None);
        };

        match self.seat_holder(section, seat_number) {
            Some(holder) if holder != *id => return Err(Error::SeatOccupied),
            Some(_) => return Ok(Some(ticket.clone())),
            None => {}
        }

        let (old_section, old_seat_number) = (ticket.section, ticket.seat_number);
        self.release_seat(old_section, old_seat_number, *id)?;
        self.occupy_seat(section, seat_number, *id)?;

        let ticket = self
            .tickets
            .get_mut(id)
            .ok_or_else(|| anyhow!("ticket {id} disappeared while moving"))?;
        ticket.section = section;
        ticket.seat_number = seat_number;

        Ok(Some(ticket.clone()))
    }

    fn occupy_seat(&mut self, section: Section, seat_number: u32, id: Uuid) -> Result<(), Error> {
        let seats = self.occupied_seats.entry(section).or_default();
        if let Some(holder) = seats.get(&seat_number) {
            return Err(anyhow!(
                "seat {section}{seat_number} already held by ticket {holder}"
            )
            .into());
        }

        seats.insert(seat_number, id);

        Ok(())
    }

    fn release_seat(&mut self, section: Section, seat_number: u32, id: Uuid) -> Result<(), Error> {
        let seats = self.occupied_seats.entry(section).or_default();
        match seats.get(&seat_number) {
            Some(holder) if *holder == id => {
                seats.remove(&seat_number);
                Ok(())
            }
            Some(holder) => Err(anyhow!(
                "seat {section}{seat_number} held by ticket {holder} instead of {id}"
            )
            .into()),
            None => Err(anyhow!("seat {section}{seat_number} of ticket {id} not occupied").into()),
        }
    }

    ///
    /// Panics when occupancy or booking index diverged from stored tickets
    ///
    #[cfg(test)]
    pub fn assert_invariants(&self) {
        for section in Section::iter() {
            let expected = self
                .tickets
                .values()
                .filter(|ticket| ticket.section == section)
                .map(|ticket| (ticket.seat_number, ticket.id))
                .collect::<BTreeMap<_, _>>();
            let live_in_section = self
                .tickets
                .values()
                .filter(|ticket| ticket.section == section)
                .count();

            assert_eq!(expected.len(), live_in_section, "seat shared in {section}");
            assert_eq!(
                self.occupied_seats.get(&section),
                Some(&expected),
                "occupancy of {section} diverged"
            );
        }

        assert_eq!(self.bookings.len(), self.tickets.len());
        for ticket in self.tickets.values() {
            assert_eq!(self.bookings.get(&BookingKey::of(ticket)), Some(&ticket.id));
        }
    }
}

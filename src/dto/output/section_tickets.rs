use super::Ticket;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SectionTickets {
    pub section: String,
    pub tickets: Vec<Ticket>,
    pub count: usize,
}

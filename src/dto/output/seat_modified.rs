use super::Ticket;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SeatModified {
    pub message: &'static str,
    pub ticket: Ticket,
}

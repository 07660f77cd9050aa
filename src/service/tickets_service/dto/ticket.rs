use crate::dto::inoutput::{Section, User};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,

    pub from: String,
    pub to: String,

    pub user: User,

    pub price: f64,

    pub section: Section,
    pub seat_number: u32,
}

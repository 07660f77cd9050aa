use crate::{
    dto::inoutput::{Section, User},
    service::tickets_service,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub user: User,
    pub price: f64,
    pub section: Section,
    pub seat_number: u32,
}

impl From<tickets_service::Ticket> for Ticket {
    fn from(value: tickets_service::Ticket) -> Self {
        Self {
            id: value.id,
            from: value.from,
            to: value.to,
            user: value.user,
            price: value.price,
            section: value.section,
            seat_number: value.seat_number,
        }
    }
}

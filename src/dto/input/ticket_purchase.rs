use crate::dto::inoutput::User;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TicketPurchase {
    pub from: String,
    pub to: String,
    pub user: User,
}

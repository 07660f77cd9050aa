use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRemoved {
    pub message: &'static str,
    pub ticket_id: String,
}

use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::{collections::BTreeSet, sync::Arc};

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/tickets", post(purchase_ticket))
        .route("/api/tickets/stations", get(get_stations))
        .route("/api/tickets/section/:section", get(get_tickets_by_section))
        .route(
            "/api/tickets/:ticket_id",
            get(get_ticket).delete(remove_ticket),
        )
        .route("/api/tickets/:ticket_id/seat", put(modify_seat))
}

async fn get_stations(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Json<BTreeSet<String>> {
    Json(tickets_service.all_stations().await)
}

async fn purchase_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Json(purchase): Json<input::TicketPurchase>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let ticket = tickets_service.purchase_ticket(purchase).await?;

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

async fn get_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<String>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service
        .find_ticket(&ticket_id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(ticket.into()))
}

async fn get_tickets_by_section(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(section): Path<String>,
) -> Result<Json<output::SectionTickets>, Error> {
    let tickets = tickets_service
        .find_tickets_by_section(&section)
        .await?
        .into_iter()
        .map(output::Ticket::from)
        .collect::<Vec<_>>();

    Ok(Json(output::SectionTickets {
        section,
        count: tickets.len(),
        tickets,
    }))
}

async fn remove_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<String>,
) -> Result<Json<output::TicketRemoved>, Error> {
    tickets_service.remove_ticket(&ticket_id).await?;

    Ok(Json(output::TicketRemoved {
        message: "Ticket successfully removed",
        ticket_id,
    }))
}

async fn modify_seat(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<String>,
    Query(modification): Query<input::SeatModification>,
) -> Result<Json<output::SeatModified>, Error> {
    let ticket = tickets_service
        .modify_seat(&ticket_id, modification)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(output::SeatModified {
        message: "Seat modified successfully",
        ticket: ticket.into(),
    }))
}

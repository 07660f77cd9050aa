use crate::dto::output;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: seat number {seat_number} not in range 1..={max}")]
    ValidationSeatNumberOutOfRange { seat_number: i64, max: u32 },

    #[error("no route found from {from} to {to}")]
    RouteNotExist { from: String, to: String },

    #[error("user already has a ticket for this route")]
    TicketAlreadyPurchased,

    #[error("seat is already occupied")]
    SeatOccupied,

    #[error("no seats available")]
    NoSeatsAvailable,

    #[error("ticket not exist")]
    TicketNotExist,

    ///
    /// This error should be returned only in situations
    /// that should never occur when ledger bookkeeping is correct.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::ValidationSeatNumberOutOfRange {
                seat_number: _,
                max: _,
            } => StatusCode::BAD_REQUEST,
            Error::RouteNotExist { from: _, to: _ } => StatusCode::BAD_REQUEST,
            Error::TicketAlreadyPurchased => StatusCode::CONFLICT,
            Error::SeatOccupied => StatusCode::CONFLICT,
            Error::NoSeatsAvailable => StatusCode::BAD_REQUEST,
            Error::TicketNotExist => StatusCode::NOT_FOUND,
            Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> output::ErrorBody {
        let (error, kind) = match self {
            Error::Validation(_)
            | Error::ValidationSeatNumberOutOfRange {
                seat_number: _,
                max: _,
            }
            | Error::RouteNotExist { from: _, to: _ } => ("Invalid Input", "INVALID_INPUT"),
            Error::TicketAlreadyPurchased => ("Duplicate Ticket", "DUPLICATE_TICKET"),
            Error::SeatOccupied => ("Seat Conflict", "SEAT_CONFLICT"),
            Error::NoSeatsAvailable => ("Operation Failed", "OPERATION_FAILED"),
            Error::TicketNotExist => ("Ticket Not Found", "NOT_FOUND"),
            Error::UnexpectedError(_) => ("Internal Error", "INTERNAL_ERROR"),
        };

        // Internal details stay in the logs
        let message = match self {
            Error::UnexpectedError(_) => "unexpected error".to_string(),
            err => err.to_string(),
        };

        output::ErrorBody {
            error,
            message,
            kind,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::UnexpectedError(_) => tracing::error!(err = %self),
            _ => tracing::warn!(err = %self),
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}

mod dto;
mod ledger;
mod tickets_service;
mod tickets_service_impl;

pub use dto::{Ticket, TicketsServiceConfig};
pub use tickets_service::*;
pub use tickets_service_impl::*;

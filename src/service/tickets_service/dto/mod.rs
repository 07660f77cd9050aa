mod ticket;
mod tickets_service_config;

pub use ticket::*;
pub use tickets_service_config::*;

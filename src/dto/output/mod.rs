mod error_body;
mod seat_modified;
mod section_tickets;
mod ticket;
mod ticket_removed;

pub use error_body::*;
pub use seat_modified::*;
pub use section_tickets::*;
pub use ticket::*;
pub use ticket_removed::*;

mod seat_modification;
mod ticket_purchase;

pub use seat_modification::*;
pub use ticket_purchase::*;

mod dto;
mod routes_service;
mod routes_service_impl;

pub use dto::{default_routes, Route};
pub use routes_service::*;
pub use routes_service_impl::*;

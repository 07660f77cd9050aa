pub mod routes_service;
pub mod tickets_service;

pub mod application;
mod dto;
mod error;
mod routing;
mod service;

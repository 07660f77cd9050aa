use super::ApplicationEnv;
use crate::service::{
    routes_service::{default_routes, RoutesServiceImpl},
    tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating routes catalog");
    let routes_service = RoutesServiceImpl::new(default_routes())?;
    let routes_service = Arc::new(routes_service);

    tracing::info!("creating services");
    let config = TicketsServiceConfig {
        seats_per_section: env.seats_per_section,
    };
    let tickets_service = TicketsServiceImpl::new(config, routes_service);
    let tickets_service = Arc::new(tickets_service);

    Ok(ApplicationState { tickets_service })
}

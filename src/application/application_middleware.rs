use super::ApplicationEnv;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub body_limit: RequestBodyLimitLayer,
    pub cors: CorsLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    // Clients are served from any origin
    let cors = CorsLayer::permissive();

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        body_limit,
        cors,
        trace,
    }
}

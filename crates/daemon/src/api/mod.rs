use axum::Router;
use std::sync::Arc;

use crate::llm::PlanGenerator;

pub mod plan;

pub fn router(generator: Arc<dyn PlanGenerator>) -> Router {
    Router::new().nest("/plan", plan::router(generator))
}

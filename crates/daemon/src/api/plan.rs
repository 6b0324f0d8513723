use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use engine::{ClipDescriptor, EditPlan, PlanSource, ProjectConfiguration};

use crate::llm::PlanGenerator;
use crate::orchestrator;

#[derive(Deserialize)]
pub struct GeneratePlanRequest {
    config: ProjectConfiguration,
    clips: Vec<ClipDescriptor>,
}

#[derive(Serialize)]
pub struct GeneratePlanResponse {
    plan: EditPlan,
    source: PlanSource,
}

pub fn router(generator: Arc<dyn PlanGenerator>) -> Router {
    Router::new()
        .route("/generate", post(generate_plan))
        .route("/defaults", get(default_config))
        .with_state(generator)
}

async fn generate_plan(
    State(generator): State<Arc<dyn PlanGenerator>>,
    Json(req): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratePlanResponse>, StatusCode> {
    // Zero clips is the one request the core refuses; everything else
    // resolves to a plan, degraded or not.
    let resolved = orchestrator::build_plan(generator.as_ref(), &req.config, &req.clips)
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(Json(GeneratePlanResponse {
        plan: resolved.plan,
        source: resolved.source,
    }))
}

/// Session-start configuration. The UI mutates its copy freely; nothing is
/// persisted server-side.
async fn default_config() -> Json<ProjectConfiguration> {
    Json(ProjectConfiguration::default())
}

use engine::{
    resolve_plan, ClipDescriptor, InvalidRequest, PlanRequest, PlanSource, ProjectConfiguration,
    ResolvedPlan,
};
use tracing::warn;

use crate::llm::PlanGenerator;

/// Build an edit plan end to end: assemble the request, run the generator,
/// validate or fall back. Given at least one clip this cannot fail; only
/// unusable input surfaces as an error.
pub async fn build_plan(
    generator: &dyn PlanGenerator,
    config: &ProjectConfiguration,
    clips: &[ClipDescriptor],
) -> Result<ResolvedPlan, InvalidRequest> {
    let request = PlanRequest::build(config, clips)?;
    let outcome = generator.generate(&request).await;

    let resolved = resolve_plan(outcome, config, clips);
    if let PlanSource::Fallback { reason } = &resolved.source {
        warn!("plan generation fell back to even split: {}", reason);
    }

    Ok(resolved)
}

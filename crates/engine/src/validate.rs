use serde::Serialize;

use crate::clip::ClipDescriptor;
use crate::error::{GenerationOutcome, PlanSource};
use crate::fallback::synthesize_fallback;
use crate::plan::EditPlan;
use crate::project::ProjectConfiguration;

/// A plan plus its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlan {
    pub plan: EditPlan,
    pub source: PlanSource,
}

/// Resolve a generation outcome into a plan. Generation is best-effort,
/// completion is guaranteed: every failure mode collapses into the
/// deterministic fallback and nothing errors past this point.
pub fn resolve_plan(
    outcome: GenerationOutcome,
    config: &ProjectConfiguration,
    clips: &[ClipDescriptor],
) -> ResolvedPlan {
    let reason = match outcome {
        GenerationOutcome::Success(raw) => match parse_edit_plan(&raw, clips) {
            Ok(plan) => {
                return ResolvedPlan {
                    plan,
                    source: PlanSource::Generated,
                }
            }
            Err(reason) => reason,
        },
        GenerationOutcome::CredentialMissing => "no API credential configured".to_string(),
        GenerationOutcome::TransportFailure(reason) => reason,
        GenerationOutcome::MalformedPayload(reason) => reason,
    };

    ResolvedPlan {
        plan: synthesize_fallback(config, clips),
        source: PlanSource::Fallback { reason },
    }
}

/// Structural and semantic parse of a raw generator payload. The remote
/// service is never trusted to have honored the schema: field presence and
/// primitive types come from the parse, and each scene must reference a clip
/// from the request with a non-negative start and a positive duration.
pub fn parse_edit_plan(raw: &str, clips: &[ClipDescriptor]) -> Result<EditPlan, String> {
    let plan: EditPlan = serde_json::from_str(raw)
        .map_err(|e| format!("payload did not match the plan schema: {}", e))?;

    if plan.scenes.is_empty() {
        return Err("payload contained no scenes".to_string());
    }

    for (idx, scene) in plan.scenes.iter().enumerate() {
        if !clips.iter().any(|c| c.id == scene.clip_id) {
            return Err(format!(
                "scene {} references unknown clip {}",
                idx, scene.clip_id
            ));
        }
        if !(scene.start_time_seconds >= 0.0) {
            return Err(format!("scene {} has a negative start time", idx));
        }
        if !(scene.duration_seconds > 0.0) {
            return Err(format!("scene {} has a non-positive duration", idx));
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::EnergyLevel;
    use serde_json::json;

    fn clips(count: usize) -> Vec<ClipDescriptor> {
        (0..count)
            .map(|i| ClipDescriptor::new(&format!("clip {}", i), 6.0, EnergyLevel::High))
            .collect()
    }

    fn well_formed_payload(clips: &[ClipDescriptor]) -> String {
        let scenes: Vec<_> = clips
            .iter()
            .map(|clip| {
                json!({
                    "clip_id": clip.id,
                    "start_time_seconds": 1.5,
                    "duration_seconds": 10.0,
                    "transition": "jump-cut",
                    "description": format!("peak moment from {}", clip.name),
                })
            })
            .collect();
        json!({ "scenes": scenes, "soundtrack_note": "boost the chorus" }).to_string()
    }

    #[test]
    fn valid_payload_is_returned_unmodified() {
        let clips = clips(2);
        let raw = well_formed_payload(&clips);
        let plan = parse_edit_plan(&raw, &clips).unwrap();
        assert_eq!(plan.scenes.len(), 2);
        assert_eq!(plan.scenes[0].transition, "jump-cut");
        assert_eq!(plan.soundtrack_note, "boost the chorus");

        let resolved = resolve_plan(
            GenerationOutcome::Success(raw),
            &ProjectConfiguration::default(),
            &clips,
        );
        assert_eq!(resolved.source, PlanSource::Generated);
        assert_eq!(resolved.plan, plan);
    }

    #[test]
    fn missing_soundtrack_note_falls_back() {
        let clips = clips(2);
        let raw = json!({
            "scenes": [{
                "clip_id": clips[0].id,
                "start_time_seconds": 0.0,
                "duration_seconds": 5.0,
                "transition": "hard-cut",
                "description": "opener",
            }]
        })
        .to_string();

        let resolved = resolve_plan(
            GenerationOutcome::Success(raw),
            &ProjectConfiguration::default(),
            &clips,
        );
        assert!(matches!(resolved.source, PlanSource::Fallback { .. }));
        assert_eq!(resolved.plan.scenes.len(), clips.len());
    }

    #[test]
    fn scene_missing_a_field_falls_back_to_clip_count_scenes() {
        let clips = clips(3);
        // Two remote scenes, the second lacking duration_seconds.
        let raw = json!({
            "scenes": [
                {
                    "clip_id": clips[0].id,
                    "start_time_seconds": 0.0,
                    "duration_seconds": 5.0,
                    "transition": "hard-cut",
                    "description": "opener",
                },
                {
                    "clip_id": clips[1].id,
                    "start_time_seconds": 2.0,
                    "transition": "cross-dissolve",
                    "description": "drop",
                }
            ],
            "soundtrack_note": "ok"
        })
        .to_string();

        let resolved = resolve_plan(
            GenerationOutcome::Success(raw),
            &ProjectConfiguration::default(),
            &clips,
        );
        assert!(matches!(resolved.source, PlanSource::Fallback { .. }));
        assert_eq!(resolved.plan.scenes.len(), 3);
    }

    #[test]
    fn scene_missing_transition_falls_back() {
        let clips = clips(1);
        let raw = json!({
            "scenes": [{
                "clip_id": clips[0].id,
                "start_time_seconds": 0.0,
                "duration_seconds": 5.0,
                "description": "opener",
            }],
            "soundtrack_note": "ok"
        })
        .to_string();

        let resolved = resolve_plan(
            GenerationOutcome::Success(raw),
            &ProjectConfiguration::default(),
            &clips,
        );
        assert!(matches!(resolved.source, PlanSource::Fallback { .. }));
    }

    #[test]
    fn wrong_primitive_type_falls_back() {
        let clips = clips(1);
        let raw = json!({
            "scenes": [{
                "clip_id": clips[0].id,
                "start_time_seconds": "zero",
                "duration_seconds": 5.0,
                "transition": "hard-cut",
                "description": "opener",
            }],
            "soundtrack_note": "ok"
        })
        .to_string();

        let result = parse_edit_plan(&raw, &clips);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_clip_reference_falls_back() {
        let clips = clips(1);
        let raw = json!({
            "scenes": [{
                "clip_id": uuid::Uuid::new_v4(),
                "start_time_seconds": 0.0,
                "duration_seconds": 5.0,
                "transition": "hard-cut",
                "description": "opener",
            }],
            "soundtrack_note": "ok"
        })
        .to_string();

        let err = parse_edit_plan(&raw, &clips).unwrap_err();
        assert!(err.contains("unknown clip"));
    }

    #[test]
    fn empty_scene_list_falls_back() {
        let clips = clips(2);
        let raw = json!({ "scenes": [], "soundtrack_note": "ok" }).to_string();

        let resolved = resolve_plan(
            GenerationOutcome::Success(raw),
            &ProjectConfiguration::default(),
            &clips,
        );
        assert!(matches!(resolved.source, PlanSource::Fallback { .. }));
        assert!(!resolved.plan.scenes.is_empty());
    }

    #[test]
    fn non_positive_duration_and_negative_start_fall_back() {
        let clips = clips(1);
        for (start, duration) in [(0.0, 0.0), (-1.0, 5.0)] {
            let raw = json!({
                "scenes": [{
                    "clip_id": clips[0].id,
                    "start_time_seconds": start,
                    "duration_seconds": duration,
                    "transition": "hard-cut",
                    "description": "opener",
                }],
                "soundtrack_note": "ok"
            })
            .to_string();
            assert!(parse_edit_plan(&raw, &clips).is_err());
        }
    }

    #[test]
    fn every_failure_outcome_resolves_to_a_plan() {
        let clips = clips(2);
        let config = ProjectConfiguration::default();
        let outcomes = [
            GenerationOutcome::CredentialMissing,
            GenerationOutcome::TransportFailure("connection refused".to_string()),
            GenerationOutcome::MalformedPayload("not json".to_string()),
            GenerationOutcome::Success("{ not even json".to_string()),
        ];

        for outcome in outcomes {
            let resolved = resolve_plan(outcome, &config, &clips);
            assert!(matches!(resolved.source, PlanSource::Fallback { .. }));
            assert_eq!(resolved.plan.scenes.len(), clips.len());
        }
    }

    #[test]
    fn transport_failure_reason_is_recorded() {
        let clips = clips(1);
        let resolved = resolve_plan(
            GenerationOutcome::TransportFailure("HTTP 503".to_string()),
            &ProjectConfiguration::default(),
            &clips,
        );
        assert_eq!(
            resolved.source,
            PlanSource::Fallback {
                reason: "HTTP 503".to_string()
            }
        );
    }
}

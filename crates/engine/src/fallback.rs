use crate::clip::ClipDescriptor;
use crate::plan::{EditPlan, SceneSegment};
use crate::project::ProjectConfiguration;

pub const FALLBACK_TRANSITION: &str = "hard-cut";
pub const FALLBACK_SOUNDTRACK_NOTE: &str =
    "Run a single continuous music bed under the whole edit, ducked beneath the live audio.";

/// Synthesize the naive plan used whenever generation is unavailable or
/// returns something unusable: one scene per clip in input order, the target
/// duration split evenly, hard cuts throughout. Deterministic, no randomness.
pub fn synthesize_fallback(config: &ProjectConfiguration, clips: &[ClipDescriptor]) -> EditPlan {
    let per_scene = config.target_duration_seconds as f64 / clips.len() as f64;

    let scenes = clips
        .iter()
        .map(|clip| SceneSegment {
            clip_id: clip.id,
            start_time_seconds: 0.0,
            duration_seconds: per_scene,
            transition: FALLBACK_TRANSITION.to_string(),
            description: format!("Straight cut from \"{}\"", clip.name),
        })
        .collect();

    EditPlan {
        scenes,
        soundtrack_note: FALLBACK_SOUNDTRACK_NOTE.to_string(),
    }
}

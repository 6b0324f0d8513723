use serde_json::{json, Value};

use crate::clip::{ClipDescriptor, MAX_CLIPS};
use crate::error::InvalidRequest;
use crate::project::ProjectConfiguration;

/// Three-part payload handed to the generator: persona instruction, task
/// instruction with the concrete parameters, and the output schema the
/// generator must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub system_instruction: String,
    pub user_instruction: String,
    pub response_schema: Value,
}

impl PlanRequest {
    /// Assemble the request. Pure and deterministic; the only failure is
    /// input no plan can be built from.
    pub fn build(
        config: &ProjectConfiguration,
        clips: &[ClipDescriptor],
    ) -> Result<PlanRequest, InvalidRequest> {
        if clips.is_empty() {
            return Err(InvalidRequest::EmptyClipSet);
        }
        if clips.len() > MAX_CLIPS {
            return Err(InvalidRequest::TooManyClips {
                count: clips.len(),
                limit: MAX_CLIPS,
            });
        }

        Ok(PlanRequest {
            system_instruction: system_instruction(),
            user_instruction: user_instruction(config, clips),
            response_schema: response_schema(),
        })
    }
}

fn system_instruction() -> String {
    "You are a professional music-video editor. You turn a set of raw concert \
     clips into a punchy short-form edit plan: an ordered list of scene cuts \
     with transitions, plus one soundtrack recommendation. Respond with JSON \
     matching the provided schema and nothing else."
        .to_string()
}

fn user_instruction(config: &ProjectConfiguration, clips: &[ClipDescriptor]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Plan the cut list for \"{}\".", config.title));
    lines.push(format!(
        "Output format: {} video, {} aspect ratio, total length close to {} seconds.",
        config.resolution.as_str(),
        config.aspect_ratio.as_str(),
        config.target_duration_seconds
    ));
    lines.push(format!("Musical focus: {}.", config.musical_focus.as_str()));

    lines.push("Source clips (id, name, estimated length, energy):".to_string());
    for clip in clips {
        lines.push(format!(
            "- {} \"{}\" {:.1}s {} energy",
            clip.id,
            clip.name,
            clip.duration_seconds,
            clip.energy_level.as_str()
        ));
    }

    lines.push(
        "Prefer abrupt transitions (jump-cut, hard-cut) for high-energy clips and \
         smoother transitions (cross-dissolve) for low-energy or vocal-focused \
         passages. Scene durations should sum to roughly the target length. Each \
         scene's clip_id must be one of the ids listed above."
            .to_string(),
    );
    if config.watermark.is_some() {
        lines.push(
            "A branding watermark is configured; give the closing scenes room to \
             carry it."
                .to_string(),
        );
    }

    lines.join("\n")
}

fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "scenes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "clip_id": { "type": "string" },
                        "start_time_seconds": { "type": "number" },
                        "duration_seconds": { "type": "number" },
                        "transition": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": [
                        "clip_id",
                        "start_time_seconds",
                        "duration_seconds",
                        "transition",
                        "description"
                    ]
                }
            },
            "soundtrack_note": { "type": "string" }
        },
        "required": ["scenes", "soundtrack_note"]
    })
}

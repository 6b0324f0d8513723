use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cut in the final edit, referencing a time range of a source clip.
/// `transition` and `description` stay open text since the generator's
/// vocabulary is not enumerable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSegment {
    pub clip_id: Uuid,
    pub start_time_seconds: f64,
    pub duration_seconds: f64,
    pub transition: String,
    pub description: String,
}

/// The complete edit: ordered scenes (playback order) plus a soundtrack
/// recommendation. Immutable once produced; a new generation supersedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditPlan {
    pub scenes: Vec<SceneSegment>,
    pub soundtrack_note: String,
}

impl EditPlan {
    /// Summed scene durations. The target duration is a soft constraint, so
    /// callers that care have to measure.
    pub fn total_duration_seconds(&self) -> f64 {
        self.scenes.iter().map(|s| s.duration_seconds).sum()
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ClipSetError;

/// Hard ceiling on the number of source clips per request.
pub const MAX_CLIPS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }
}

/// One imported source clip. Ids are minted on import and stay stable for
/// the session; descriptors are removed whole, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDescriptor {
    pub id: Uuid,
    pub name: String,
    pub duration_seconds: f64,
    pub energy_level: EnergyLevel,
}

impl ClipDescriptor {
    pub fn new(name: &str, duration_seconds: f64, energy_level: EnergyLevel) -> Self {
        ClipDescriptor {
            id: Uuid::new_v4(),
            name: name.to_string(),
            duration_seconds,
            energy_level,
        }
    }
}

/// Ordered, bounded clip collection with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipSet {
    clips: Vec<ClipDescriptor>,
}

impl ClipSet {
    pub fn new() -> Self {
        ClipSet { clips: Vec::new() }
    }

    pub fn add(&mut self, clip: ClipDescriptor) -> Result<(), ClipSetError> {
        if self.clips.len() >= MAX_CLIPS {
            return Err(ClipSetError::Full(MAX_CLIPS));
        }
        if self.clips.iter().any(|c| c.id == clip.id) {
            return Err(ClipSetError::DuplicateId(clip.id));
        }
        self.clips.push(clip);
        Ok(())
    }

    /// Drop the descriptor with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.clips.len();
        self.clips.retain(|c| c.id != id);
        self.clips.len() != before
    }

    pub fn clips(&self) -> &[ClipDescriptor] {
        &self.clips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClipDescriptor> {
        self.clips.iter()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

use serde::{Deserialize, Serialize};

// UI slider bounds for the duration target. The core publishes them but does
// not hard-validate the field.
pub const MIN_TARGET_DURATION_SECONDS: u32 = 15;
pub const MAX_TARGET_DURATION_SECONDS: u32 = 120;
pub const TARGET_DURATION_STEP_SECONDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::TwoK => "2K",
            Resolution::FourK => "4K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Vertical => "9:16",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Square => "1:1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicalFocus {
    #[serde(rename = "vocals")]
    Vocals,
    #[serde(rename = "guitar-solos")]
    GuitarSolos,
    #[serde(rename = "drums")]
    Drums,
    #[serde(rename = "crowd-energy")]
    CrowdEnergy,
}

impl MusicalFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicalFocus::Vocals => "vocals",
            MusicalFocus::GuitarSolos => "guitar-solos",
            MusicalFocus::Drums => "drums",
            MusicalFocus::CrowdEnergy => "crowd-energy",
        }
    }
}

/// Desired output of the edit. Created with defaults at session start,
/// mutated freely by the caller, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    pub title: String,
    pub resolution: Resolution,
    pub target_duration_seconds: u32,
    pub aspect_ratio: AspectRatio,
    pub musical_focus: MusicalFocus,
    /// Optional image resource reference. Presence only biases the request
    /// instructions; the plan contract does not depend on it.
    pub watermark: Option<String>,
}

impl Default for ProjectConfiguration {
    fn default() -> Self {
        ProjectConfiguration {
            title: "Untitled reel".to_string(),
            resolution: Resolution::TwoK,
            target_duration_seconds: 60,
            aspect_ratio: AspectRatio::Vertical,
            musical_focus: MusicalFocus::Vocals,
            watermark: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_labels_round_trip() {
        let json = serde_json::to_string(&AspectRatio::Vertical).unwrap();
        assert_eq!(json, "\"9:16\"");
        let parsed: AspectRatio = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AspectRatio::Vertical);

        let focus: MusicalFocus = serde_json::from_str("\"guitar-solos\"").unwrap();
        assert_eq!(focus, MusicalFocus::GuitarSolos);
        assert_eq!(focus.as_str(), "guitar-solos");
    }

    #[test]
    fn default_configuration_is_within_ui_bounds() {
        let config = ProjectConfiguration::default();
        assert!(config.target_duration_seconds >= MIN_TARGET_DURATION_SECONDS);
        assert!(config.target_duration_seconds <= MAX_TARGET_DURATION_SECONDS);
        assert_eq!(config.target_duration_seconds % TARGET_DURATION_STEP_SECONDS, 0);
        assert!(config.watermark.is_none());
    }
}

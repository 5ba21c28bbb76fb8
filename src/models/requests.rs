use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to plan a day around a vibe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VibeRequest {
    #[validate(length(min = 1))]
    pub vibe_description: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl VibeRequest {
    /// Location string, with empty and whitespace-only values treated as absent
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

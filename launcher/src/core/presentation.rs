//! Mapping from launch outcomes to what the shell should display
//!
//! A stub outcome is shown as a fixed fallback page rather than an empty
//! screen; the `fallback` flag lets the shell style it differently.

use serde::Serialize;
use shared::LaunchOutcome;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Presentation {
    Loading,
    Web { url: Url, fallback: bool },
}

impl Presentation {
    pub fn from_outcome(outcome: &LaunchOutcome, fallback_url: &Url) -> Self {
        match outcome {
            LaunchOutcome::Loading => Presentation::Loading,
            LaunchOutcome::ShowStub => Presentation::Web {
                url: fallback_url.clone(),
                fallback: true,
            },
            LaunchOutcome::ShowWeb(url) => Presentation::Web {
                url: url.clone(),
                fallback: false,
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Presentation::Web { fallback: true, .. })
    }
}

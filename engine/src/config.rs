//! Engine configuration

use serde::{Deserialize, Serialize};
use shared::ProviderId;

use crate::core::optimizer::DEFAULT_TOP_N;
use crate::error::{EngineError, EngineResult};

/// Tunables for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Providers targeted when the caller names none
    pub default_providers: Vec<ProviderId>,
    /// Recommended techniques applied when nothing is selected
    pub recommended_top_n: usize,
    /// Records shown by `Session::display_history`
    pub history_display_limit: usize,
    /// Characters of a report shown in previews
    pub report_preview_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_providers: ProviderId::all().to_vec(),
            recommended_top_n: DEFAULT_TOP_N,
            history_display_limit: 10,
            report_preview_chars: 500,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.recommended_top_n == 0 {
            return Err(EngineError::config("recommended_top_n must be at least 1"));
        }
        if self.default_providers.is_empty() {
            return Err(EngineError::config("default_providers must not be empty"));
        }
        Ok(())
    }

    /// Requested providers, or the configured defaults when none are named
    pub fn providers_or_default(&self, requested: &[ProviderId]) -> Vec<ProviderId> {
        if requested.is_empty() { self.default_providers.clone() } else { requested.to_vec() }
    }
}

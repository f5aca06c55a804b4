//! Optimization orchestrator
//!
//! Resolves a selection into a technique chain per provider and applies the
//! chain to a fresh copy of the prompt. The result is a pure function of the
//! inputs: no clock, no randomness.

use serde::{Deserialize, Serialize};
use shared::{component_debug, component_info, Component, FocusArea, Mode, ProviderId, TaskCategory, TechniqueCategory};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::core::{classifier, profiles, registry};
use crate::core::registry::Technique;
use crate::error::{EngineError, EngineResult};

/// Default number of recommended techniques used when nothing is selected
pub const DEFAULT_TOP_N: usize = 3;

/// What the caller asked to apply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// The provider's top recommended techniques
    #[default]
    Recommended,
    /// Explicit technique ids; unknown ids are skipped
    Techniques(Vec<String>),
    /// A named mode, resolved per provider
    Mode(Mode),
    /// Focus areas, resolved per provider; an empty list means `Recommended`
    FocusAreas(Vec<FocusArea>),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Recommended => write!(f, "recommended"),
            Selection::Techniques(ids) => write!(f, "techniques[{}]", ids.join(", ")),
            Selection::Mode(mode) => write!(f, "mode:{mode}"),
            Selection::FocusAreas(areas) => {
                let names: Vec<&str> = areas.iter().map(|a| a.as_str()).collect();
                write!(f, "focus[{}]", names.join(", "))
            }
        }
    }
}

/// Provenance entry for one applied technique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedTechnique {
    pub id: String,
    pub name: String,
    pub category: TechniqueCategory,
}

impl AppliedTechnique {
    fn from_technique(technique: &Technique) -> Self {
        Self {
            id: technique.id.to_string(),
            name: technique.name.to_string(),
            category: technique.category,
        }
    }
}

impl fmt::Display for AppliedTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category.label())
    }
}

/// Optimized text and provenance for one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutput {
    pub provider: ProviderId,
    pub text: String,
    pub applied: Vec<AppliedTechnique>,
}

impl ProviderOutput {
    /// Display names of applied techniques, in application order
    pub fn technique_names(&self) -> Vec<String> {
        self.applied.iter().map(|t| t.name.clone()).collect()
    }

    /// `name (category label)` for each applied technique
    pub fn provenance(&self) -> Vec<String> {
        self.applied.iter().map(|t| t.to_string()).collect()
    }
}

/// Result of one optimize call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    pub outputs: BTreeMap<ProviderId, ProviderOutput>,
    pub selection: Selection,
    /// Concrete mode used when the selection was a mode
    pub resolved_mode: Option<Mode>,
    /// Detected intent when the selection was `Mode::Auto`
    pub intent: Option<TaskCategory>,
}

impl OptimizationOutcome {
    /// Human-readable description of how techniques were chosen
    pub fn mode_label(&self) -> String {
        match (&self.selection, self.resolved_mode, self.intent) {
            (Selection::Mode(Mode::Auto), Some(mode), Some(intent)) => format!("auto ({intent} -> {mode})"),
            _ => self.selection.to_string(),
        }
    }

    /// Provider -> optimized text
    pub fn texts(&self) -> BTreeMap<ProviderId, String> {
        self.outputs.iter().map(|(p, o)| (*p, o.text.clone())).collect()
    }

    /// Provider -> applied technique display names
    pub fn technique_names(&self) -> BTreeMap<ProviderId, Vec<String>> {
        self.outputs.iter().map(|(p, o)| (*p, o.technique_names())).collect()
    }
}

/// Applies technique chains to prompts
#[derive(Debug, Clone)]
pub struct Optimizer {
    top_n: usize,
}

impl Optimizer {
    pub fn new() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }

    /// Use a different number of recommended techniques for the fallback chain
    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Optimize a prompt for each requested provider
    pub fn optimize(
        &self,
        prompt: &str,
        providers: &[ProviderId],
        selection: &Selection,
    ) -> EngineResult<OptimizationOutcome> {
        if prompt.trim().is_empty() {
            return Err(EngineError::invalid_input("prompt is empty"));
        }
        let providers: BTreeSet<ProviderId> = providers.iter().copied().collect();
        if providers.is_empty() {
            return Err(EngineError::invalid_input("no target providers selected"));
        }

        // Auto resolves once per call; the intent does not depend on the provider
        let (resolved_mode, intent) = match selection {
            Selection::Mode(Mode::Auto) => {
                let intent = classifier::classify(prompt);
                component_debug!(Component::Classifier, intent = %intent, "Detected prompt intent");
                (Some(intent.mode()), Some(intent))
            }
            Selection::Mode(mode) => (Some(*mode), None),
            _ => (None, None),
        };

        let mut outputs = BTreeMap::new();
        for provider in providers {
            let chain = self.resolve_chain(provider, selection, resolved_mode);
            let (text, applied) = apply_chain(prompt, &chain);
            component_debug!(
                Component::Optimizer,
                provider = %provider,
                techniques = applied.len(),
                "Applied technique chain"
            );
            outputs.insert(provider, ProviderOutput { provider, text, applied });
        }

        component_info!(
            Component::Optimizer,
            providers = outputs.len(),
            selection = %selection,
            "Prompt optimized"
        );

        Ok(OptimizationOutcome {
            outputs,
            selection: selection.clone(),
            resolved_mode,
            intent,
        })
    }

    /// Technique chain for one provider, deduplicated and in registry order
    pub fn resolve_chain(
        &self,
        provider: ProviderId,
        selection: &Selection,
        resolved_mode: Option<Mode>,
    ) -> Vec<&'static Technique> {
        let profile = profiles::profile(provider);

        let ids: Vec<&str> = match selection {
            Selection::Techniques(ids) if !ids.is_empty() => ids.iter().map(String::as_str).collect(),
            Selection::FocusAreas(areas) if !areas.is_empty() => {
                areas.iter().filter_map(|a| profile.focus_technique(*a)).collect()
            }
            Selection::Mode(mode) => profile.mode_chain(resolved_mode.unwrap_or(*mode)).to_vec(),
            _ => profile.top_recommended(self.top_n).to_vec(),
        };

        let mut positions: Vec<usize> = ids
            .into_iter()
            .filter_map(|id| {
                let position = registry::position(id);
                if position.is_none() {
                    component_debug!(Component::Registry, technique = id, "Skipping unknown technique id");
                }
                position
            })
            .collect();
        positions.sort_unstable();
        positions.dedup();

        positions.into_iter().map(|p| &registry::all()[p]).collect()
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply techniques in order, each consuming the previous output
pub fn apply_chain(prompt: &str, chain: &[&Technique]) -> (String, Vec<AppliedTechnique>) {
    let mut text = prompt.to_string();
    let mut applied = Vec::with_capacity(chain.len());
    for technique in chain {
        text = technique.apply(&text);
        applied.push(AppliedTechnique::from_technique(technique));
    }
    (text, applied)
}

//! Provider profiles
//!
//! Static per-provider configuration: pricing, context size, strengths and
//! the technique chains used for each mode and focus area. Supporting a new
//! provider means adding a profile here; the optimizer has no per-provider
//! branches.

use shared::{FocusArea, Mode, ProviderId};

/// Immutable description of one provider
#[derive(Debug)]
pub struct ProviderProfile {
    pub id: ProviderId,
    pub models: &'static [&'static str],
    pub max_context_tokens: u64,
    /// USD per 1K input tokens
    pub input_price_per_1k: f64,
    /// USD per 1K output tokens
    pub output_price_per_1k: f64,
    pub strengths: &'static [&'static str],
    pub formatting_tips: &'static [&'static str],
    /// Recommended technique ids, best first
    pub recommended: &'static [&'static str],
    mode_chains: &'static [(Mode, &'static [&'static str])],
    focus_techniques: &'static [(FocusArea, &'static str)],
}

/// Focus areas that resolve the same way for every provider
const UNIVERSAL_FOCUS: &[(FocusArea, &str)] = &[
    (FocusArea::Specificity, "specificity_hints"),
    (FocusArea::Examples, "illustrative_examples"),
    (FocusArea::Constraints, "practical_constraints"),
];

static ANTHROPIC: ProviderProfile = ProviderProfile {
    id: ProviderId::Anthropic,
    models: &["Claude 4 Opus", "Claude 4 Sonnet", "Claude 3.5 Sonnet", "Claude 3 Haiku"],
    max_context_tokens: 200_000,
    input_price_per_1k: 0.015,
    output_price_per_1k: 0.075,
    strengths: &["Complex reasoning", "Creative writing", "Code generation", "Long context"],
    formatting_tips: &[
        "Use XML tags for structure",
        "Provide clear role definitions",
        "Use step-by-step instructions",
        "Include examples when possible",
    ],
    recommended: &["xml_tags", "step_by_step", "expert_role", "illustrative_examples"],
    mode_chains: &[
        (Mode::Reasoning, &["xml_tags", "step_by_step"]),
        (Mode::Creative, &["xml_tags", "creative_writer_role", "narrative_requirements"]),
        (Mode::Coding, &["xml_tags", "software_engineer_role", "code_deliverables"]),
        (Mode::Data, &["xml_tags", "data_analyst_role", "analysis_report"]),
        (Mode::Minimal, &["xml_tags"]),
    ],
    focus_techniques: &[
        (FocusArea::Structure, "xml_tags"),
        (FocusArea::Clarity, "clarity_cleanup"),
    ],
};

static OPENAI: ProviderProfile = ProviderProfile {
    id: ProviderId::OpenAI,
    models: &["GPT-4 Turbo", "GPT-4", "GPT-3.5 Turbo"],
    max_context_tokens: 128_000,
    input_price_per_1k: 0.01,
    output_price_per_1k: 0.03,
    strengths: &["General knowledge", "Function calling", "JSON mode", "Vision capabilities"],
    formatting_tips: &[
        "Use system messages effectively",
        "Specify output format clearly",
        "Use temperature for creativity control",
        "Leverage function calling for structured outputs",
    ],
    recommended: &["markdown_sections", "json_output", "step_by_step", "few_shot_skeleton"],
    mode_chains: &[
        (Mode::Reasoning, &["markdown_sections", "step_by_step", "self_verification"]),
        (Mode::Creative, &["creative_writer_role", "narrative_requirements", "illustrative_examples"]),
        (Mode::Coding, &["markdown_sections", "software_engineer_role", "code_deliverables"]),
        (Mode::Data, &["markdown_sections", "data_analyst_role", "analysis_report", "json_output"]),
        (Mode::Minimal, &["markdown_sections"]),
    ],
    focus_techniques: &[
        (FocusArea::Structure, "markdown_sections"),
        (FocusArea::JsonOutput, "json_output"),
    ],
};

static GOOGLE: ProviderProfile = ProviderProfile {
    id: ProviderId::Google,
    models: &["Gemini 2.5 Pro", "Gemini 2.5 Flash", "Gemini 2.0", "Gemini 1.5 Pro"],
    max_context_tokens: 2_000_000,
    input_price_per_1k: 0.00125,
    output_price_per_1k: 0.005,
    strengths: &["Multimodal understanding", "Long context", "Speed", "Cost efficiency"],
    formatting_tips: &[
        "Use clear task descriptions",
        "Leverage multimodal capabilities",
        "Provide context upfront",
        "Use structured prompts for complex tasks",
    ],
    recommended: &["labeled_sections", "response_sections", "illustrative_examples", "practical_constraints"],
    mode_chains: &[
        (Mode::Reasoning, &["labeled_sections", "step_by_step"]),
        (Mode::Creative, &["labeled_sections", "creative_writer_role", "narrative_requirements"]),
        (Mode::Coding, &["labeled_sections", "software_engineer_role", "code_deliverables"]),
        (Mode::Data, &["labeled_sections", "data_analyst_role", "analysis_report"]),
        (Mode::Minimal, &["labeled_sections"]),
    ],
    focus_techniques: &[(FocusArea::Structure, "labeled_sections")],
};

/// Profile for a provider
pub fn profile(provider: ProviderId) -> &'static ProviderProfile {
    match provider {
        ProviderId::Anthropic => &ANTHROPIC,
        ProviderId::OpenAI => &OPENAI,
        ProviderId::Google => &GOOGLE,
    }
}

/// Every profile, in provider display order
pub fn all() -> [&'static ProviderProfile; 3] {
    ProviderId::all().map(profile)
}

impl ProviderProfile {
    /// First `n` recommended technique ids
    pub fn top_recommended(&self, n: usize) -> &'static [&'static str] {
        &self.recommended[..n.min(self.recommended.len())]
    }

    /// Technique chain for a concrete mode; `Mode::Auto` has none of its own
    pub fn mode_chain(&self, mode: Mode) -> &'static [&'static str] {
        self.mode_chains
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, chain)| *chain)
            .unwrap_or(&[])
    }

    /// Technique that realizes a focus area for this provider, if any
    pub fn focus_technique(&self, area: FocusArea) -> Option<&'static str> {
        self.focus_techniques
            .iter()
            .chain(UNIVERSAL_FOCUS.iter())
            .find(|(a, _)| *a == area)
            .map(|(_, id)| *id)
    }

    /// Estimated input cost in USD for a token count
    pub fn estimate_cost(&self, tokens: usize) -> f64 {
        tokens as f64 / 1000.0 * self.input_price_per_1k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry;

    #[test]
    fn test_every_referenced_technique_exists() {
        for profile in all() {
            for id in profile.recommended {
                assert!(registry::lookup(id).is_some(), "{:?} recommends unknown {id}", profile.id);
            }
            for mode in Mode::all() {
                for id in profile.mode_chain(mode) {
                    assert!(registry::lookup(id).is_some(), "{:?}/{mode} uses unknown {id}", profile.id);
                }
            }
            for area in FocusArea::all() {
                if let Some(id) = profile.focus_technique(area) {
                    assert!(registry::lookup(id).is_some());
                }
            }
        }
    }

    #[test]
    fn test_every_concrete_mode_has_a_chain() {
        for profile in all() {
            assert!(profile.mode_chain(Mode::Auto).is_empty());
            for mode in [Mode::Reasoning, Mode::Creative, Mode::Coding, Mode::Data, Mode::Minimal] {
                assert!(!profile.mode_chain(mode).is_empty());
            }
        }
    }

    #[test]
    fn test_top_recommended_is_bounded() {
        let anthropic = profile(ProviderId::Anthropic);
        assert_eq!(anthropic.top_recommended(3).len(), 3);
        assert_eq!(anthropic.top_recommended(100).len(), anthropic.recommended.len());
        assert!(anthropic.top_recommended(0).is_empty());
    }

    #[test]
    fn test_focus_resolution() {
        let openai = profile(ProviderId::OpenAI);
        assert_eq!(openai.focus_technique(FocusArea::JsonOutput), Some("json_output"));
        assert_eq!(openai.focus_technique(FocusArea::Clarity), None);
        assert_eq!(openai.focus_technique(FocusArea::Examples), Some("illustrative_examples"));

        let google = profile(ProviderId::Google);
        assert_eq!(google.focus_technique(FocusArea::Structure), Some("labeled_sections"));
        assert_eq!(google.focus_technique(FocusArea::JsonOutput), None);
    }

    #[test]
    fn test_cost_estimate() {
        let openai = profile(ProviderId::OpenAI);
        assert!((openai.estimate_cost(1000) - 0.01).abs() < 1e-12);
        assert_eq!(openai.estimate_cost(0), 0.0);
    }
}

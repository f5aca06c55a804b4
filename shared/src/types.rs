//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::errors::SharedError;

/// Unique identifier for an optimization record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// LLM providers a prompt can be tailored for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProviderId {
    Anthropic,
    OpenAI,
    Google,
}

impl ProviderId {
    /// Every supported provider, in display order
    pub fn all() -> [ProviderId; 3] {
        [ProviderId::Anthropic, ProviderId::OpenAI, ProviderId::Google]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Anthropic => "Anthropic",
            ProviderId::OpenAI => "OpenAI",
            ProviderId::Google => "Google",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(ProviderId::Anthropic),
            "openai" | "gpt" | "chatgpt" => Ok(ProviderId::OpenAI),
            "google" | "gemini" => Ok(ProviderId::Google),
            _ => Err(SharedError::UnknownProvider { input: s.to_string() }),
        }
    }
}

/// Task category assigned to a raw prompt by keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    Coding,
    DataAnalysis,
    Creative,
    Reasoning,
    General,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Coding => "coding",
            TaskCategory::DataAnalysis => "data-analysis",
            TaskCategory::Creative => "creative",
            TaskCategory::Reasoning => "reasoning",
            TaskCategory::General => "general",
        }
    }

    /// Concrete mode that `Mode::Auto` resolves to for this category
    pub fn mode(&self) -> Mode {
        match self {
            TaskCategory::Coding => Mode::Coding,
            TaskCategory::DataAnalysis => Mode::Data,
            TaskCategory::Creative => Mode::Creative,
            TaskCategory::Reasoning => Mode::Reasoning,
            TaskCategory::General => Mode::Minimal,
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named optimization bundle; resolves to a provider-specific technique chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Auto,
    Reasoning,
    Creative,
    Coding,
    Data,
    Minimal,
}

impl Mode {
    pub fn all() -> [Mode; 6] {
        [Mode::Auto, Mode::Reasoning, Mode::Creative, Mode::Coding, Mode::Data, Mode::Minimal]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Reasoning => "reasoning",
            Mode::Creative => "creative",
            Mode::Coding => "coding",
            Mode::Data => "data",
            Mode::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Mode::Auto),
            "reasoning" => Ok(Mode::Reasoning),
            "creative" => Ok(Mode::Creative),
            "coding" | "code" => Ok(Mode::Coding),
            "data" | "data-analysis" => Ok(Mode::Data),
            "minimal" => Ok(Mode::Minimal),
            _ => Err(SharedError::UnknownMode { input: s.to_string() }),
        }
    }
}

/// Optimization focus areas a user can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusArea {
    Structure,
    Clarity,
    Specificity,
    Examples,
    Constraints,
    JsonOutput,
}

impl FocusArea {
    pub fn all() -> [FocusArea; 6] {
        [
            FocusArea::Structure,
            FocusArea::Clarity,
            FocusArea::Specificity,
            FocusArea::Examples,
            FocusArea::Constraints,
            FocusArea::JsonOutput,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::Structure => "Structure",
            FocusArea::Clarity => "Clarity",
            FocusArea::Specificity => "Specificity",
            FocusArea::Examples => "Examples",
            FocusArea::Constraints => "Constraints",
            FocusArea::JsonOutput => "JSON Output",
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocusArea {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "structure" => Ok(FocusArea::Structure),
            "clarity" => Ok(FocusArea::Clarity),
            "specificity" => Ok(FocusArea::Specificity),
            "examples" => Ok(FocusArea::Examples),
            "constraints" => Ok(FocusArea::Constraints),
            "json" | "json output" => Ok(FocusArea::JsonOutput),
            _ => Err(SharedError::UnknownFocusArea { input: s.to_string() }),
        }
    }
}

/// Fixed set of technique categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechniqueCategory {
    StructuralMarkup,
    ReasoningScaffold,
    RolePersona,
    OutputFormat,
    ConstraintInjection,
    ExemplarInjection,
}

impl TechniqueCategory {
    pub fn all() -> [TechniqueCategory; 6] {
        [
            TechniqueCategory::StructuralMarkup,
            TechniqueCategory::ReasoningScaffold,
            TechniqueCategory::RolePersona,
            TechniqueCategory::OutputFormat,
            TechniqueCategory::ConstraintInjection,
            TechniqueCategory::ExemplarInjection,
        ]
    }

    /// Machine identifier, e.g. `reasoning-scaffold`
    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueCategory::StructuralMarkup => "structural-markup",
            TechniqueCategory::ReasoningScaffold => "reasoning-scaffold",
            TechniqueCategory::RolePersona => "role-persona",
            TechniqueCategory::OutputFormat => "output-format",
            TechniqueCategory::ConstraintInjection => "constraint-injection",
            TechniqueCategory::ExemplarInjection => "exemplar-injection",
        }
    }

    /// Human-readable label shown next to applied techniques
    pub fn label(&self) -> &'static str {
        match self {
            TechniqueCategory::StructuralMarkup => "Structure",
            TechniqueCategory::ReasoningScaffold => "Chain of Thought",
            TechniqueCategory::RolePersona => "Role Prompting",
            TechniqueCategory::OutputFormat => "Output Format",
            TechniqueCategory::ConstraintInjection => "Constraints",
            TechniqueCategory::ExemplarInjection => "Few-Shot Examples",
        }
    }
}

impl fmt::Display for TechniqueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TechniqueCategory {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TechniqueCategory::all()
            .into_iter()
            .find(|c| c.as_str() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| SharedError::UnknownCategory { input: s.to_string() })
    }
}

/// Lexical statistics and heuristic scores for a prompt
///
/// `estimated_token_count` is an approximation (`round(words * 1.3)`), not
/// tokenizer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub word_count: usize,
    pub char_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    #[serde(alias = "estimated_tokens")]
    pub estimated_token_count: usize,
    pub clarity_score: f64,
    #[serde(default)]
    pub readability_score: f64,
}

impl Metrics {
    /// Words per sentence, treating a sentence-less text as one sentence
    pub fn words_per_sentence(&self) -> f64 {
        self.word_count as f64 / self.sentence_count.max(1) as f64
    }
}

/// Core components that emit log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Metrics,
    Registry,
    Classifier,
    Optimizer,
    History,
    Templates,
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Metrics => write!(f, "metrics"),
            Component::Registry => write!(f, "registry"),
            Component::Classifier => write!(f, "classifier"),
            Component::Optimizer => write!(f, "optimizer"),
            Component::History => write!(f, "history"),
            Component::Templates => write!(f, "templates"),
            Component::Cli => write!(f, "cli"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_aliases() {
        assert_eq!("Claude".parse::<ProviderId>().unwrap(), ProviderId::Anthropic);
        assert_eq!("GPT".parse::<ProviderId>().unwrap(), ProviderId::OpenAI);
        assert_eq!("gemini".parse::<ProviderId>().unwrap(), ProviderId::Google);
        assert!("mistral".parse::<ProviderId>().is_err());
    }

    #[test]
    fn test_focus_area_parsing() {
        assert_eq!("json-output".parse::<FocusArea>().unwrap(), FocusArea::JsonOutput);
        assert_eq!("JSON Output".parse::<FocusArea>().unwrap(), FocusArea::JsonOutput);
        assert_eq!("clarity".parse::<FocusArea>().unwrap(), FocusArea::Clarity);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in TechniqueCategory::all() {
            assert_eq!(category.as_str().parse::<TechniqueCategory>().unwrap(), category);
            assert_eq!(category.label().parse::<TechniqueCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_record_id_round_trip() {
        let id = RecordId::new();
        assert_eq!(RecordId::from_string(&id.to_string()).unwrap(), id);
        assert!(RecordId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_words_per_sentence_floor() {
        let metrics = Metrics {
            word_count: 4,
            char_count: 20,
            sentence_count: 0,
            avg_word_length: 4.0,
            estimated_token_count: 5,
            clarity_score: 0.0,
            readability_score: 0.0,
        };
        assert_eq!(metrics.words_per_sentence(), 4.0);
    }
}

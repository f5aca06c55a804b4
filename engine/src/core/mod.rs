//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable; the only stateful
//! piece is the history ledger.

pub mod analysis;
pub mod classifier;
pub mod history;
pub mod metrics;
pub mod optimizer;
pub mod profiles;
pub mod registry;
pub mod report;
pub mod templates;

pub use analysis::{PromptAnalysis, ProviderComparison};
pub use history::{HistoryLedger, OptimizationRecord};
pub use optimizer::{AppliedTechnique, OptimizationOutcome, Optimizer, ProviderOutput, Selection};
pub use profiles::ProviderProfile;
pub use registry::Technique;
pub use templates::PromptTemplate;

//! Rule-based prompt rewriting engine
//!
//! Turns a raw prompt into provider-tailored variants by composing static
//! scaffolding techniques, and scores prompts with lexical metrics. The
//! four entry points a presentation layer needs are re-exported here:
//! [`compute_metrics`], [`classify`], [`optimize`] and the history
//! operations on [`Session`].

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod session;
pub mod traits;

use std::collections::BTreeMap;

// Re-export commonly used types
pub use config::EngineConfig;
pub use crate::core::classifier::classify;
pub use crate::core::metrics::compute_metrics;
pub use crate::core::{
    AppliedTechnique, HistoryLedger, OptimizationOutcome, OptimizationRecord, Optimizer, PromptAnalysis,
    PromptTemplate, ProviderOutput, Selection, Technique,
};
pub use error::{EngineError, EngineResult};
pub use services::{RealFileSystem, SystemClock};
pub use session::Session;
pub use traits::{Clock, FileSystem};

/// Optimize a prompt with the default optimizer
pub fn optimize(
    prompt: &str,
    providers: &[shared::ProviderId],
    selection: &Selection,
) -> EngineResult<BTreeMap<shared::ProviderId, ProviderOutput>> {
    Optimizer::new().optimize(prompt, providers, selection).map(|outcome| outcome.outputs)
}

//! Restaurant recommendation pipeline.
//!
//! Queries the venue directory with progressively relaxed filters, asks a
//! chat model to pick from the verified candidates, binds the picks back to
//! directory records by ordinal, and falls back to directory-only results
//! whenever the model's answer cannot be used. Every recommendation that
//! leaves this crate was built from a record the directory returned.

pub mod error;
pub mod extract;
pub mod fallback;
pub mod pipeline;
pub mod prompt;
pub mod reconcile;
pub mod session;
pub mod types;

pub use error::{FollowUpError, ParseError, SelectionRejection};
pub use fallback::{generic_narrative, synthesize};
pub use pipeline::get_recommendations;
pub use prompt::{system_role, Prompt, PromptBuilder};
pub use reconcile::{reconcile, Reconciliation};
pub use session::{Exchange, LastSearch, RecommendationSession, ASSISTANT_ROLE};
pub use types::{
    PipelineLimits, PipelineNotice, RecommendationOutcome, RecommendationSet, RecommendationSource,
};

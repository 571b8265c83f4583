use std::fmt;

use dinerec_core::{AppConfig, VerifiedRecommendation};
use dinerec_directory::{AttemptFailure, FilterLevel};
use serde::Serialize;

/// Size limits applied by the pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineLimits {
    /// Records requested from (and kept after) the directory.
    pub directory_max_records: usize,
    /// Candidates embedded in the model prompt.
    pub prompt_max_candidates: usize,
    /// Below this many candidates the model is not called.
    pub min_candidates: usize,
    /// Venues synthesized when the model call fails or its reply is unparsable.
    pub fallback_count: usize,
    /// Venues synthesized when the reply parses but no selection survives.
    pub empty_selection_fallback_count: usize,
    /// How many venues the model is asked to pick.
    pub selection_count: usize,
}

impl Default for PipelineLimits {
    fn default() -> Self {
        Self {
            directory_max_records: 20,
            prompt_max_candidates: 15,
            min_candidates: 3,
            fallback_count: 5,
            empty_selection_fallback_count: 3,
            selection_count: 3,
        }
    }
}

impl From<&AppConfig> for PipelineLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            directory_max_records: config.directory_max_records,
            prompt_max_candidates: config.prompt_max_candidates,
            min_candidates: config.min_candidates,
            fallback_count: config.fallback_count,
            empty_selection_fallback_count: config.empty_selection_fallback_count,
            selection_count: config.selection_count,
        }
    }
}

/// Which path produced the recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Selected and narrated by the model.
    Model,
    /// Too few candidates to be worth a model call.
    FewCandidates,
    /// The model endpoint could not be reached.
    ModelUnavailable,
    /// The model replied but the reply could not be parsed.
    UnparsableResponse,
    /// The reply parsed but none of its selections matched a candidate.
    NoValidSelections,
}

impl RecommendationSource {
    #[must_use]
    pub fn is_fallback(self) -> bool {
        self != RecommendationSource::Model
    }
}

/// A degraded step the caller may want to show or log. Notices never stop
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineNotice {
    DirectoryAttemptFailed { level: FilterLevel, message: String },
    ModelUnavailable { message: String },
    UnparsableResponse { message: String },
    SelectionDropped { reason: String },
}

impl From<AttemptFailure> for PipelineNotice {
    fn from(failure: AttemptFailure) -> Self {
        PipelineNotice::DirectoryAttemptFailed {
            level: failure.level,
            message: failure.message,
        }
    }
}

impl fmt::Display for PipelineNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineNotice::DirectoryAttemptFailed { level, message } => write!(
                f,
                "directory search by {} failed: {message}",
                level.describe()
            ),
            PipelineNotice::ModelUnavailable { message } => {
                write!(f, "recommendation model unavailable: {message}")
            }
            PipelineNotice::UnparsableResponse { message } => {
                write!(f, "could not read the model's answer: {message}")
            }
            PipelineNotice::SelectionDropped { reason } => {
                write!(f, "ignored a model selection: {reason}")
            }
        }
    }
}

/// A non-empty list of verified recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<VerifiedRecommendation>,
    pub source: RecommendationSource,
    /// The directory filter combination that produced the candidates.
    pub filter_level: FilterLevel,
    pub notices: Vec<PipelineNotice>,
}

/// Result of one search. There is no error variant: every failure either
/// degrades to a fallback set or ends in [`RecommendationOutcome::NoVenuesFound`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Found(RecommendationSet),
    NoVenuesFound { notices: Vec<PipelineNotice> },
}

impl RecommendationOutcome {
    /// The recommendations, or an empty slice when nothing was found.
    #[must_use]
    pub fn recommendations(&self) -> &[VerifiedRecommendation] {
        match self {
            RecommendationOutcome::Found(set) => &set.recommendations,
            RecommendationOutcome::NoVenuesFound { .. } => &[],
        }
    }

    #[must_use]
    pub fn notices(&self) -> &[PipelineNotice] {
        match self {
            RecommendationOutcome::Found(set) => &set.notices,
            RecommendationOutcome::NoVenuesFound { notices } => notices,
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<RecommendationSource> {
        match self {
            RecommendationOutcome::Found(set) => Some(set.source),
            RecommendationOutcome::NoVenuesFound { .. } => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, RecommendationOutcome::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_failure_notice_names_the_filter_level() {
        let notice = PipelineNotice::from(AttemptFailure {
            level: FilterLevel::WithoutCuisine,
            message: "timeout".to_string(),
        });
        assert_eq!(
            notice.to_string(),
            "directory search by location and budget failed: timeout"
        );
    }

    #[test]
    fn no_venues_outcome_has_no_recommendations() {
        let outcome = RecommendationOutcome::NoVenuesFound {
            notices: Vec::new(),
        };
        assert!(outcome.recommendations().is_empty());
        assert!(!outcome.is_found());
        assert_eq!(outcome.source(), None);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = RecommendationOutcome::NoVenuesFound {
            notices: vec![PipelineNotice::ModelUnavailable {
                message: "down".to_string(),
            }],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "no_venues_found");
        assert_eq!(json["notices"][0]["kind"], "model_unavailable");
    }

    #[test]
    fn only_model_source_is_not_fallback() {
        assert!(!RecommendationSource::Model.is_fallback());
        assert!(RecommendationSource::FewCandidates.is_fallback());
        assert!(RecommendationSource::NoValidSelections.is_fallback());
    }
}

//! Recommendation pipeline orchestration.

use dinerec_core::{NormalizedVenue, SearchCriteria, Tier, UserContext, VerifiedRecommendation};
use dinerec_directory::{fetch_candidates, normalize_candidates, FilterLevel, VenueDirectory};
use dinerec_llm::ChatModel;

use crate::fallback::synthesize;
use crate::prompt::PromptBuilder;
use crate::reconcile::reconcile;
use crate::types::{
    PipelineLimits, PipelineNotice, RecommendationOutcome, RecommendationSet, RecommendationSource,
};

/// Run one search end to end.
///
/// 1. Query the directory, relaxing filters until something is found.
/// 2. Normalize the records; ordinals follow directory order.
/// 3. With fewer than `min_candidates` venues, return them all without
///    calling the model.
/// 4. Ask the model to choose from the first `prompt_max_candidates`.
/// 5. Reconcile the reply against exactly those candidates.
/// 6. Fall back to directory-only results if the call fails, the reply is
///    unreadable, or no selection survives.
///
/// Never fails: transport and parse problems become [`PipelineNotice`]s on
/// the outcome, and an exhausted directory yields
/// [`RecommendationOutcome::NoVenuesFound`].
pub async fn get_recommendations(
    directory: &dyn VenueDirectory,
    model: &dyn ChatModel,
    criteria: &SearchCriteria,
    tier: Tier,
    user_context: &UserContext,
    limits: &PipelineLimits,
) -> RecommendationOutcome {
    // Step 1: directory.
    let fetched = fetch_candidates(directory, criteria, limits.directory_max_records).await;
    let mut notices: Vec<PipelineNotice> =
        fetched.failures.into_iter().map(PipelineNotice::from).collect();

    let Some(filter_level) = fetched.matched.filter(|_| !fetched.records.is_empty()) else {
        tracing::info!(
            location = %criteria.location,
            "no venues found for these criteria"
        );
        return RecommendationOutcome::NoVenuesFound { notices };
    };

    // Step 2: normalize.
    let candidates = normalize_candidates(&fetched.records);
    tracing::info!(
        candidates = candidates.len(),
        filter = filter_level.describe(),
        "directory candidates ready"
    );

    // Step 3: too few to bother the model.
    if candidates.len() < limits.min_candidates {
        tracing::info!(
            candidates = candidates.len(),
            minimum = limits.min_candidates,
            "below minimum candidate count, skipping model"
        );
        return found(
            synthesize(&candidates, candidates.len()),
            RecommendationSource::FewCandidates,
            filter_level,
            notices,
        );
    }

    // Step 4: model.
    let builder = PromptBuilder {
        max_candidates: limits.prompt_max_candidates,
        selection_count: limits.selection_count,
    };
    let prompt = builder.build(criteria, tier, user_context, &candidates);
    tracing::debug!(
        tier = %tier,
        embedded = prompt.candidates.len(),
        "requesting model selection"
    );

    let reply = match model.complete(prompt.system, &prompt.user).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "model call failed, using directory results");
            notices.push(PipelineNotice::ModelUnavailable {
                message: e.to_string(),
            });
            return fallback(
                &candidates,
                limits.fallback_count,
                RecommendationSource::ModelUnavailable,
                filter_level,
                notices,
            );
        }
    };

    // Step 5: reconcile.
    let reconciled = match reconcile(&reply, prompt.candidates) {
        Ok(reconciled) => reconciled,
        Err(e) => {
            tracing::warn!(error = %e, "model reply unparsable, using directory results");
            notices.push(PipelineNotice::UnparsableResponse {
                message: e.to_string(),
            });
            return fallback(
                &candidates,
                limits.fallback_count,
                RecommendationSource::UnparsableResponse,
                filter_level,
                notices,
            );
        }
    };

    notices.extend(
        reconciled
            .rejected
            .iter()
            .map(|rejection| PipelineNotice::SelectionDropped {
                reason: rejection.to_string(),
            }),
    );

    // Step 6: nothing usable survived.
    if reconciled.recommendations.is_empty() {
        tracing::warn!("no model selection matched a candidate, using directory results");
        return fallback(
            &candidates,
            limits.empty_selection_fallback_count,
            RecommendationSource::NoValidSelections,
            filter_level,
            notices,
        );
    }

    tracing::info!(
        recommendations = reconciled.recommendations.len(),
        dropped = reconciled.rejected.len(),
        "model recommendations reconciled"
    );
    found(
        reconciled.recommendations,
        RecommendationSource::Model,
        filter_level,
        notices,
    )
}

fn fallback(
    candidates: &[NormalizedVenue],
    count: usize,
    source: RecommendationSource,
    filter_level: FilterLevel,
    notices: Vec<PipelineNotice>,
) -> RecommendationOutcome {
    // Hand-built limits may carry a zero count.
    found(
        synthesize(candidates, count.max(1)),
        source,
        filter_level,
        notices,
    )
}

fn found(
    recommendations: Vec<VerifiedRecommendation>,
    source: RecommendationSource,
    filter_level: FilterLevel,
    notices: Vec<PipelineNotice>,
) -> RecommendationOutcome {
    RecommendationOutcome::Found(RecommendationSet {
        recommendations,
        source,
        filter_level,
        notices,
    })
}

//! Binds model selections back to the candidates they were offered.

use std::collections::HashSet;

use dinerec_core::{Narrative, NormalizedVenue, VerifiedRecommendation};

use crate::error::{ParseError, SelectionRejection};
use crate::extract::{read_selection, selection_entries, ModelSelection};

pub(crate) const DEFAULT_ATMOSPHERE: &str = "no info";
pub(crate) const DEFAULT_REASON: &str = "no reason given";

/// Selections that survived reconciliation, plus the ones that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub recommendations: Vec<VerifiedRecommendation>,
    pub rejected: Vec<SelectionRejection>,
}

/// Reconciles a raw model reply against `candidates`, the exact list that
/// was embedded in the prompt.
///
/// Venue facts always come from the candidate the ordinal points at; the
/// model only contributes the narrative. Unusable entries are collected in
/// [`Reconciliation::rejected`] without affecting the others. A candidate
/// picked twice is kept once, at its first position.
///
/// # Errors
///
/// Returns a [`ParseError`] when no selection list can be read from the
/// reply at all.
pub fn reconcile(
    reply: &str,
    candidates: &[NormalizedVenue],
) -> Result<Reconciliation, ParseError> {
    let entries = selection_entries(reply)?;
    let mut result = Reconciliation::default();
    let mut seen = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let position = index + 1;
        let bound = read_selection(position, entry).and_then(|selection| {
            let venue = resolve(position, selection.ordinal, candidates)?;
            if !seen.insert(venue.ordinal) {
                return Err(SelectionRejection::Duplicate {
                    position,
                    ordinal: selection.ordinal,
                });
            }
            Ok((venue, selection))
        });

        match bound {
            Ok((venue, selection)) => result
                .recommendations
                .push(VerifiedRecommendation::new(venue, narrative(selection))),
            Err(rejection) => {
                tracing::warn!(%rejection, "dropping model selection");
                result.rejected.push(rejection);
            }
        }
    }

    tracing::debug!(
        entries = entries.len(),
        kept = result.recommendations.len(),
        rejected = result.rejected.len(),
        "reconciled model selections"
    );
    Ok(result)
}

fn resolve(
    position: usize,
    ordinal: i64,
    candidates: &[NormalizedVenue],
) -> Result<&NormalizedVenue, SelectionRejection> {
    usize::try_from(ordinal)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| candidates.get(index))
        .ok_or(SelectionRejection::OutOfRange {
            position,
            ordinal,
            candidates: candidates.len(),
        })
}

fn narrative(selection: ModelSelection) -> Narrative {
    Narrative {
        highlights: selection.highlights.unwrap_or_default(),
        atmosphere: selection
            .atmosphere
            .unwrap_or_else(|| DEFAULT_ATMOSPHERE.to_string()),
        reason: selection
            .reason
            .unwrap_or_else(|| DEFAULT_REASON.to_string()),
    }
}

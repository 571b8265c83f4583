//! Directory query stage: progressively relaxed filters until a search
//! returns at least one venue.

use async_trait::async_trait;
use dinerec_core::SearchCriteria;

use crate::codes::{budget_codes, genre_code};
use crate::error::DirectoryError;
use crate::normalize::resolve_url;
use crate::types::RawVenueRecord;

/// A single search request against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub keyword: String,
    pub genre: Option<&'static str>,
    pub budget: &'static [&'static str],
    pub count: usize,
}

/// Anything that can answer a [`DirectoryQuery`]. Implemented by
/// [`crate::HotpepperClient`] and by in-memory stubs in tests.
#[async_trait]
pub trait VenueDirectory: Send + Sync {
    /// Run one search. An empty `Vec` is a successful search with no hits.
    async fn search(&self, query: &DirectoryQuery) -> Result<Vec<RawVenueRecord>, DirectoryError>;
}

/// Filter combinations, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterLevel {
    /// location + cuisine + budget
    Strict,
    /// location + cuisine
    WithoutBudget,
    /// location + budget
    WithoutCuisine,
    /// location only
    LocationOnly,
}

impl FilterLevel {
    pub const ALL: [FilterLevel; 4] = [
        FilterLevel::Strict,
        FilterLevel::WithoutBudget,
        FilterLevel::WithoutCuisine,
        FilterLevel::LocationOnly,
    ];

    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            FilterLevel::Strict => "location, cuisine and budget",
            FilterLevel::WithoutBudget => "location and cuisine",
            FilterLevel::WithoutCuisine => "location and budget",
            FilterLevel::LocationOnly => "location only",
        }
    }

    fn keeps_cuisine(self) -> bool {
        matches!(self, FilterLevel::Strict | FilterLevel::WithoutBudget)
    }

    fn keeps_budget(self) -> bool {
        matches!(self, FilterLevel::Strict | FilterLevel::WithoutCuisine)
    }
}

impl DirectoryQuery {
    /// Builds the request for one relaxation level.
    #[must_use]
    pub fn for_level(criteria: &SearchCriteria, level: FilterLevel, count: usize) -> Self {
        Self {
            keyword: criteria.location.clone(),
            genre: if level.keeps_cuisine() {
                genre_code(criteria.cuisine)
            } else {
                None
            },
            budget: if level.keeps_budget() {
                budget_codes(criteria.budget)
            } else {
                &[]
            },
            count,
        }
    }
}

/// A directory attempt that failed in transport or parsing. The stage moves
/// on to the next level; the failure is reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub level: FilterLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct QueryOutcome {
    /// Records with a detail URL first, capped at the requested count.
    /// Empty when every level came back empty or failed.
    pub records: Vec<RawVenueRecord>,
    /// The level that produced `records`.
    pub matched: Option<FilterLevel>,
    pub failures: Vec<AttemptFailure>,
}

/// Runs the relaxation sequence and returns the first non-empty result.
///
/// Levels whose request is identical to one already sent (for example,
/// dropping the cuisine filter when no cuisine was chosen) are skipped
/// rather than re-sent. Errors never abort the sequence: a failed level is
/// recorded in [`QueryOutcome::failures`] and the next level is tried.
pub async fn fetch_candidates(
    directory: &dyn VenueDirectory,
    criteria: &SearchCriteria,
    max_records: usize,
) -> QueryOutcome {
    let mut issued: Vec<DirectoryQuery> = Vec::with_capacity(FilterLevel::ALL.len());
    let mut failures = Vec::new();

    for level in FilterLevel::ALL {
        let query = DirectoryQuery::for_level(criteria, level, max_records);
        if issued.contains(&query) {
            tracing::debug!(?level, "filter combination already tried, skipping");
            continue;
        }

        let result = directory.search(&query).await;
        issued.push(query);

        match result {
            Ok(records) if !records.is_empty() => {
                let fetched = records.len();
                let records = url_bearing_first(records, max_records);
                tracing::info!(
                    location = %criteria.location,
                    ?level,
                    fetched,
                    kept = records.len(),
                    "directory returned candidates"
                );
                return QueryOutcome {
                    records,
                    matched: Some(level),
                    failures,
                };
            }
            Ok(_) => {
                tracing::debug!(?level, "directory returned no venues, relaxing filters");
            }
            Err(e) => {
                tracing::warn!(?level, error = %e, "directory search failed, relaxing filters");
                failures.push(AttemptFailure {
                    level,
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        location = %criteria.location,
        failed_attempts = failures.len(),
        "no venues found at any filter level"
    );
    QueryOutcome {
        records: Vec::new(),
        matched: None,
        failures,
    }
}

/// Stable partition: records with a usable detail URL keep their relative
/// order and come before those without, then the list is capped.
fn url_bearing_first(records: Vec<RawVenueRecord>, limit: usize) -> Vec<RawVenueRecord> {
    let (mut with_url, without_url): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| !resolve_url(record).is_empty());
    with_url.extend(without_url);
    with_url.truncate(limit);
    with_url
}

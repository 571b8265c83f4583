//! Caller-owned state kept between searches: the last outcome and the
//! follow-up question transcript about it.

use chrono::{DateTime, Utc};
use dinerec_core::{SearchCriteria, VerifiedRecommendation};
use dinerec_llm::ChatModel;

use crate::error::FollowUpError;
use crate::types::RecommendationOutcome;

pub const ASSISTANT_ROLE: &str = "You are a restaurant search assistant. Answer the user's \
                                  questions about restaurants politely and accurately.";

#[derive(Debug, Clone)]
pub struct LastSearch {
    pub criteria: SearchCriteria,
    pub outcome: RecommendationOutcome,
    pub searched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationSession {
    last: Option<LastSearch>,
    transcript: Vec<Exchange>,
}

impl RecommendationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored search. The transcript belongs to the previous
    /// results and is cleared.
    pub fn record(&mut self, criteria: SearchCriteria, outcome: RecommendationOutcome) {
        self.last = Some(LastSearch {
            criteria,
            outcome,
            searched_at: Utc::now(),
        });
        self.transcript.clear();
    }

    #[must_use]
    pub fn last_search(&self) -> Option<&LastSearch> {
        self.last.as_ref()
    }

    /// Recommendations from the last search, empty before the first one.
    #[must_use]
    pub fn last_recommendations(&self) -> &[VerifiedRecommendation] {
        self.last
            .as_ref()
            .map(|last| last.outcome.recommendations())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Answers a question about the last results.
    ///
    /// A question already asked since the last search returns the stored
    /// answer without calling the model.
    ///
    /// # Errors
    ///
    /// [`FollowUpError::EmptyQuestion`] for a blank question, or
    /// [`FollowUpError::Model`] when the model call fails. A failed call
    /// leaves the transcript unchanged.
    pub async fn ask(
        &mut self,
        model: &dyn ChatModel,
        question: &str,
    ) -> Result<String, FollowUpError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(FollowUpError::EmptyQuestion);
        }

        if let Some(previous) = self.transcript.iter().find(|e| e.question == question) {
            tracing::debug!(question, "follow-up already answered");
            return Ok(previous.answer.clone());
        }

        let prompt = follow_up_prompt(self.last_recommendations(), question);
        let answer = model.complete(ASSISTANT_ROLE, &prompt).await?;

        self.transcript.push(Exchange {
            question: question.to_string(),
            answer: answer.clone(),
            asked_at: Utc::now(),
        });
        Ok(answer)
    }
}

fn follow_up_prompt(recommendations: &[VerifiedRecommendation], question: &str) -> String {
    if recommendations.is_empty() {
        return format!("User question: {question}");
    }

    let mut lines = vec!["Answer about the following restaurants:".to_string()];
    lines.extend(recommendations.iter().enumerate().map(|(i, rec)| {
        let venue = rec.venue();
        format!(
            "Restaurant {}: {} ({}) - {}",
            i + 1,
            venue.name,
            venue.cuisine,
            venue.address
        )
    }));
    lines.push(String::new());
    lines.push(format!("User question: {question}"));
    lines.join("\n")
}

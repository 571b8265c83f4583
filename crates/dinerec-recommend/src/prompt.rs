//! Builds the model instruction from criteria and verified candidates.

use dinerec_core::{NormalizedVenue, SearchCriteria, Tier, UserContext};

/// System role sent with a recommendation request for `tier`.
#[must_use]
pub fn system_role(tier: Tier) -> &'static str {
    match tier {
        Tier::Basic => {
            "You provide basic restaurant information. Make simple recommendations \
             based on the cuisine and the location."
        }
        Tier::Conditional => {
            "You are a conditional restaurant recommendation assistant. Suggest the \
             restaurants that best satisfy every stated condition: location, cuisine, \
             budget, party size and occasion."
        }
        Tier::Personalized => {
            "You are a highly personalized restaurant recommendation assistant. Use the \
             user's past preferences, visit history and dietary restrictions together with \
             the current conditions. Tailor each suggestion to this particular user \
             rather than giving generic recommendations."
        }
    }
}

/// A ready-to-send instruction. `candidates` is the exact list embedded in
/// `user`; replies must be reconciled against it and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub system: &'static str,
    pub user: String,
    pub candidates: &'a [NormalizedVenue],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBuilder {
    /// Never more than this many candidates are embedded.
    pub max_candidates: usize,
    /// How many venues the model is asked to pick.
    pub selection_count: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            max_candidates: 15,
            selection_count: 3,
        }
    }
}

impl PromptBuilder {
    #[must_use]
    pub fn build<'a>(
        &self,
        criteria: &SearchCriteria,
        tier: Tier,
        user_context: &UserContext,
        candidates: &'a [NormalizedVenue],
    ) -> Prompt<'a> {
        let embedded = &candidates[..candidates.len().min(self.max_candidates)];
        let picks = self.selection_count.clamp(1, embedded.len().max(1));

        let mut lines = vec![
            "Search conditions:".to_string(),
            format!("- Location: {}", one_line(&criteria.location)),
            format!("- Cuisine: {}", criteria.cuisine.label()),
            format!("- Budget: {}", criteria.budget.label()),
            format!("- Party size: {}", criteria.party_size.get()),
            format!("- Occasion: {}", criteria.occasion.label()),
            format!(
                "- Additional requests: {}",
                if criteria.extra_requests.is_empty() {
                    "none".to_string()
                } else {
                    one_line(&criteria.extra_requests)
                }
            ),
            String::new(),
        ];

        if tier == Tier::Personalized && !user_context.is_empty() {
            lines.extend(profile_lines(user_context));
            lines.push(String::new());
        }

        lines.push(format!(
            "Candidate restaurants from the directory ({} listed):",
            embedded.len()
        ));
        lines.extend(embedded.iter().map(candidate_line));
        lines.push(String::new());

        lines.push(format!(
            "Choose up to {picks} restaurants ONLY from the numbered list above. \
             Do not suggest any restaurant that is not in the list, and refer to each \
             choice by its number."
        ));
        lines.push("Answer with JSON in exactly this format:".to_string());
        lines.push(OUTPUT_SHAPE.to_string());

        Prompt {
            system: system_role(tier),
            user: lines.join("\n"),
            candidates: embedded,
        }
    }
}

const OUTPUT_SHAPE: &str = r#"```json
[
  {
    "number": 1,
    "name": "restaurant name as listed",
    "cuisine": "cuisine as listed",
    "budget": "budget as listed",
    "highlights": ["highlight 1", "highlight 2"],
    "atmosphere": "short description of the atmosphere",
    "reason": "why this restaurant fits the request"
  }
]
```"#;

fn candidate_line(venue: &NormalizedVenue) -> String {
    format!(
        "[{}] {} | {} | {} | {} | {}",
        venue.ordinal,
        one_line(&venue.name),
        one_line(&venue.cuisine),
        one_line(&venue.budget),
        one_line(&venue.access),
        one_line(&venue.tagline),
    )
}

fn profile_lines(ctx: &UserContext) -> Vec<String> {
    let mut lines = vec!["About this user:".to_string()];
    if !ctx.favorite_cuisines.is_empty() {
        lines.push(format!(
            "- Favorite cuisines: {}",
            ctx.favorite_cuisines.join(", ")
        ));
    }
    if !ctx.favorite_atmospheres.is_empty() {
        lines.push(format!(
            "- Preferred atmosphere: {}",
            ctx.favorite_atmospheres.join(", ")
        ));
    }
    if !ctx.dietary_restrictions.is_empty() {
        lines.push(format!(
            "- Dietary restrictions: {}",
            ctx.dietary_restrictions.join(", ")
        ));
    }
    let history = ctx.visit_history.trim();
    if !history.is_empty() {
        lines.push(format!(
            "- Places they enjoyed before: {}",
            one_line(history)
        ));
    }
    lines
}

/// Collapses whitespace runs (including newlines) so a field cannot break
/// the one-candidate-per-line layout.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! `search` command: wires the directory and model clients into the
//! recommendation pipeline and prints the outcome.

use anyhow::Context;
use dinerec_core::{AppConfig, PartySize, SearchCriteria, Tier, UserContext, VerifiedRecommendation};
use dinerec_directory::HotpepperClient;
use dinerec_llm::{ChatSettings, OpenAiChatClient};
use dinerec_recommend::{
    get_recommendations, Exchange, PipelineLimits, RecommendationOutcome, RecommendationSession,
};

use crate::SearchArgs;

pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let criteria = criteria_from_args(&args)?;
    let user_context = match &args.profile {
        Some(path) => dinerec_core::load_user_context(path)?,
        None => {
            if args.tier == Tier::Personalized {
                tracing::info!("personalized tier without a profile file, using no preferences");
            }
            UserContext::default()
        }
    };

    let directory = HotpepperClient::with_base_url(
        &config.hotpepper_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.directory_base_url,
    )
    .context("failed to build directory client")?;
    let model = OpenAiChatClient::new(
        &config.openai_api_key,
        &config.model_base_url,
        ChatSettings {
            model: config.model_name.clone(),
            temperature: config.model_temperature,
        },
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build model client")?;

    let outcome = get_recommendations(
        &directory,
        &model,
        &criteria,
        args.tier,
        &user_context,
        &PipelineLimits::from(config),
    )
    .await;

    let mut session = RecommendationSession::new();
    session.record(criteria, outcome);

    for question in &args.questions {
        if let Err(e) = session.ask(&model, question).await {
            tracing::error!(question = %question, error = %e, "follow-up question failed");
        }
    }

    let Some(last) = session.last_search() else {
        anyhow::bail!("search result was not recorded");
    };
    if args.json {
        let body = serde_json::json!({
            "location": last.criteria.location,
            "tier": args.tier,
            "searched_at": last.searched_at.to_rfc3339(),
            "outcome": last.outcome,
            "follow_ups": session
                .transcript()
                .iter()
                .map(|e| serde_json::json!({ "question": e.question, "answer": e.answer }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", render_outcome(&last.outcome));
        if !session.transcript().is_empty() {
            println!("{}", render_transcript(session.transcript()));
        }
    }

    Ok(())
}

pub(crate) fn criteria_from_args(args: &SearchArgs) -> anyhow::Result<SearchCriteria> {
    let mut criteria = SearchCriteria::new(&args.location, args.budget)?
        .with_cuisine(args.cuisine)
        .with_party_size(PartySize::new(args.party_size)?)
        .with_occasion(args.occasion);
    if let Some(extra) = &args.extra {
        criteria = criteria.with_extra_requests(extra);
    }
    Ok(criteria)
}

pub(crate) fn render_outcome(outcome: &RecommendationOutcome) -> String {
    let mut lines = Vec::new();
    for notice in outcome.notices() {
        lines.push(format!("note: {notice}"));
    }

    match outcome {
        RecommendationOutcome::NoVenuesFound { .. } => {
            lines.push("No venues found for these criteria.".to_string());
        }
        RecommendationOutcome::Found(set) => {
            if set.source.is_fallback() {
                lines.push("Showing directory results without AI commentary.".to_string());
            }
            lines.push(format!(
                "{} restaurant(s) found (matched by {}).",
                set.recommendations.len(),
                set.filter_level.describe()
            ));
            for (i, rec) in set.recommendations.iter().enumerate() {
                lines.push(String::new());
                lines.extend(render_recommendation(i + 1, rec));
            }
        }
    }
    lines.join("\n")
}

fn render_recommendation(position: usize, rec: &VerifiedRecommendation) -> Vec<String> {
    let venue = rec.venue();
    let narrative = rec.narrative();

    let mut lines = vec![
        format!("{position}. {} [{}]", venue.name, venue.cuisine),
        format!("   Budget: {}", venue.budget),
    ];
    if !narrative.highlights.is_empty() {
        lines.push("   Highlights:".to_string());
        lines.extend(narrative.highlights.iter().map(|h| format!("     - {h}")));
    }
    lines.push(format!("   Atmosphere: {}", narrative.atmosphere));
    lines.push(format!("   Address: {}", venue.address));
    lines.push(format!("   Access: {}", venue.access));
    lines.push(format!("   Hours: {}", venue.hours));
    lines.push(format!("   Why: {}", narrative.reason));
    if venue.has_url() {
        lines.push(format!("   URL: {}", venue.url));
    }
    lines
}

fn render_transcript(transcript: &[Exchange]) -> String {
    let mut lines = vec![String::new(), "Follow-up questions:".to_string()];
    for exchange in transcript {
        lines.push(format!("Q: {}", exchange.question));
        lines.push(format!("A: {}", exchange.answer));
    }
    lines.join("\n")
}

use super::*;

use dinerec_core::{Narrative, NormalizedVenue, VerifiedRecommendation};
use dinerec_directory::FilterLevel;
use dinerec_recommend::{
    synthesize, PipelineNotice, RecommendationOutcome, RecommendationSet, RecommendationSource,
};

fn parse_search(args: &[&str]) -> SearchArgs {
    let cli = Cli::try_parse_from(["dinerec", "search"].iter().chain(args))
        .expect("expected valid cli args");
    match cli.command {
        Commands::Search(args) => args,
    }
}

fn venue(url: &str) -> NormalizedVenue {
    NormalizedVenue {
        ordinal: 1,
        directory_id: "J001".to_string(),
        name: "Menya Test".to_string(),
        cuisine: "Ramen".to_string(),
        budget: "1001-1500 yen".to_string(),
        access: "3 min from Shinjuku Station".to_string(),
        address: "Shinjuku 3-1-1".to_string(),
        tagline: "no info".to_string(),
        hours: "11:00-23:00".to_string(),
        url: url.to_string(),
        photo_url: String::new(),
    }
}

#[test]
fn search_defaults() {
    let args = parse_search(&["--location", "Shinjuku"]);

    assert_eq!(args.location, "Shinjuku");
    assert_eq!(args.cuisine, Cuisine::Unspecified);
    assert_eq!(args.budget, BudgetBand::From1000To3000);
    assert_eq!(args.party_size, 2);
    assert_eq!(args.occasion, Occasion::Unspecified);
    assert_eq!(args.tier, Tier::Conditional);
    assert!(args.profile.is_none());
    assert!(!args.json);
    assert!(args.questions.is_empty());
}

#[test]
fn search_accepts_every_criterion() {
    let args = parse_search(&[
        "--location",
        "Ginza",
        "--cuisine",
        "sushi",
        "--budget",
        "over-10,000",
        "--party-size",
        "4",
        "--occasion",
        "anniversary",
        "--extra",
        "private room",
        "--tier",
        "personalized",
        "--profile",
        "me.yaml",
        "--json",
    ]);

    assert_eq!(args.cuisine, Cuisine::Sushi);
    assert_eq!(args.budget, BudgetBand::Over10000);
    assert_eq!(args.party_size, 4);
    assert_eq!(args.occasion, Occasion::Anniversary);
    assert_eq!(args.extra.as_deref(), Some("private room"));
    assert_eq!(args.tier, Tier::Personalized);
    assert_eq!(args.profile, Some(PathBuf::from("me.yaml")));
    assert!(args.json);
}

#[test]
fn ask_is_repeatable() {
    let args = parse_search(&[
        "--location",
        "Shibuya",
        "--ask",
        "Is it kid friendly?",
        "--ask",
        "Any vegetarian options?",
    ]);
    assert_eq!(
        args.questions,
        ["Is it kid friendly?", "Any vegetarian options?"]
    );
}

#[test]
fn unknown_cuisine_is_rejected() {
    let result = Cli::try_parse_from([
        "dinerec",
        "search",
        "--location",
        "Shinjuku",
        "--cuisine",
        "martian",
    ]);
    assert!(result.is_err());
}

#[test]
fn location_is_required() {
    assert!(Cli::try_parse_from(["dinerec", "search"]).is_err());
}

#[test]
fn out_of_range_party_size_fails_criteria() {
    let args = parse_search(&["--location", "Shinjuku", "--party-size", "21"]);
    assert!(search::criteria_from_args(&args).is_err());
}

#[test]
fn blank_location_fails_criteria() {
    let args = parse_search(&["--location", "  "]);
    assert!(search::criteria_from_args(&args).is_err());
}

#[test]
fn render_lists_venue_and_narrative() {
    let rec = VerifiedRecommendation::new(
        &venue("https://www.hotpepper.jp/strJ001/"),
        Narrative {
            highlights: vec!["thick noodles".to_string()],
            atmosphere: "counter seats".to_string(),
            reason: "quick and cheap".to_string(),
        },
    );
    let outcome = RecommendationOutcome::Found(RecommendationSet {
        recommendations: vec![rec],
        source: RecommendationSource::Model,
        filter_level: FilterLevel::Strict,
        notices: Vec::new(),
    });

    let text = search::render_outcome(&outcome);

    assert!(text.contains("1. Menya Test [Ramen]"));
    assert!(text.contains("     - thick noodles"));
    assert!(text.contains("Atmosphere: counter seats"));
    assert!(text.contains("Why: quick and cheap"));
    assert!(text.contains("URL: https://www.hotpepper.jp/strJ001/"));
    assert!(!text.contains("without AI commentary"));
}

#[test]
fn render_marks_fallback_and_omits_missing_url() {
    let outcome = RecommendationOutcome::Found(RecommendationSet {
        recommendations: synthesize(&[venue("")], 5),
        source: RecommendationSource::ModelUnavailable,
        filter_level: FilterLevel::LocationOnly,
        notices: vec![PipelineNotice::ModelUnavailable {
            message: "timeout".to_string(),
        }],
    });

    let text = search::render_outcome(&outcome);

    assert!(text.starts_with("note: recommendation model unavailable: timeout"));
    assert!(text.contains("without AI commentary"));
    assert!(text.contains("matched by location only"));
    assert!(!text.contains("URL:"));
}

#[test]
fn render_reports_nothing_found() {
    let outcome = RecommendationOutcome::NoVenuesFound {
        notices: Vec::new(),
    };
    assert_eq!(
        search::render_outcome(&outcome),
        "No venues found for these criteria."
    );
}

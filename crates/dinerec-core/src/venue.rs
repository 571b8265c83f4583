//! Venue shapes shared by the directory, prompt and display layers.

use serde::{Deserialize, Serialize};

/// A directory record in canonical form. Every field is populated; missing
/// data is represented by placeholder text or, for links, an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedVenue {
    /// 1-based position in the candidate list for the current search. This is
    /// the only identifier ever shown to the model.
    pub ordinal: usize,
    /// Provider-native identifier, kept for display and never sent to the model.
    pub directory_id: String,
    pub name: String,
    pub cuisine: String,
    pub budget: String,
    pub access: String,
    pub address: String,
    pub tagline: String,
    pub hours: String,
    /// Detail page URL, or `""` when the directory has none.
    pub url: String,
    /// Photo URL, or `""` when the directory has none.
    pub photo_url: String,
}

impl NormalizedVenue {
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Descriptive text attached to a recommended venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub highlights: Vec<String>,
    pub atmosphere: String,
    pub reason: String,
}

/// A recommendation whose facts come from a [`NormalizedVenue`] returned by
/// the directory. The only constructor takes the venue by reference, so a
/// recommendation can never name a venue the directory did not return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedRecommendation {
    #[serde(flatten)]
    venue: NormalizedVenue,
    #[serde(flatten)]
    narrative: Narrative,
}

impl VerifiedRecommendation {
    #[must_use]
    pub fn new(venue: &NormalizedVenue, narrative: Narrative) -> Self {
        Self {
            venue: venue.clone(),
            narrative,
        }
    }

    #[must_use]
    pub fn venue(&self) -> &NormalizedVenue {
        &self.venue
    }

    #[must_use]
    pub fn narrative(&self) -> &Narrative {
        &self.narrative
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.venue.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.venue.address
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.venue.url
    }

    #[must_use]
    pub fn highlights(&self) -> &[String] {
        &self.narrative.highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> NormalizedVenue {
        NormalizedVenue {
            ordinal: 1,
            directory_id: "J000000001".to_string(),
            name: "Menya Test".to_string(),
            cuisine: "Ramen".to_string(),
            budget: "1001-1500 yen".to_string(),
            access: "3 min from Shinjuku Station".to_string(),
            address: "Tokyo, Shinjuku 1-1-1".to_string(),
            tagline: "Rich tonkotsu".to_string(),
            hours: "11:00-23:00".to_string(),
            url: String::new(),
            photo_url: String::new(),
        }
    }

    #[test]
    fn has_url_is_false_for_empty_url() {
        assert!(!venue().has_url());
    }

    #[test]
    fn recommendation_copies_venue_facts() {
        let v = venue();
        let rec = VerifiedRecommendation::new(
            &v,
            Narrative {
                highlights: vec!["thick noodles".to_string()],
                atmosphere: "lively".to_string(),
                reason: "fits the budget".to_string(),
            },
        );
        assert_eq!(rec.name(), v.name);
        assert_eq!(rec.address(), v.address);
        assert_eq!(rec.venue(), &v);
        assert_eq!(rec.highlights(), ["thick noodles".to_string()]);
    }

    #[test]
    fn recommendation_serializes_flat() {
        let rec = VerifiedRecommendation::new(&venue(), Narrative::default());
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["name"], "Menya Test");
        assert_eq!(json["url"], "");
        assert!(json["highlights"].as_array().unwrap().is_empty());
        assert!(json.get("venue").is_none());
    }
}

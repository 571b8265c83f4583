use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::criteria::CriteriaError;
use crate::ConfigError;

/// Recommendation mode. Tiers only change what the model is told to do;
/// the pipeline runs the same stages for all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    #[default]
    Conditional,
    Personalized,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Conditional, Tier::Personalized];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Conditional => "conditional",
            Tier::Personalized => "personalized",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Tier {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Tier::ALL
            .into_iter()
            .find(|t| t.slug() == folded)
            .ok_or_else(|| CriteriaError::UnknownValue {
                kind: "tier",
                value: s.to_string(),
                expected: "basic, conditional, personalized".to_string(),
            })
    }
}

/// Accumulated personal preferences, consulted only by the personalized tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    pub favorite_cuisines: Vec<String>,
    pub favorite_atmospheres: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    /// Free text, typically one venue per line.
    pub visit_history: String,
}

impl UserContext {
    /// `true` when no preference of any kind has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorite_cuisines.is_empty()
            && self.favorite_atmospheres.is_empty()
            && self.dietary_restrictions.is_empty()
            && self.visit_history.trim().is_empty()
    }
}

/// Load a [`UserContext`] from a YAML profile file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or contains a
/// blank list entry.
pub fn load_user_context(path: &Path) -> Result<UserContext, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let context = parse_user_context(&content)?;
    Ok(context)
}

fn parse_user_context(content: &str) -> Result<UserContext, ConfigError> {
    // An empty file is a valid, empty profile.
    if content.trim().is_empty() {
        return Ok(UserContext::default());
    }

    let context: UserContext =
        serde_yaml::from_str(content).map_err(ConfigError::ProfileFileParse)?;

    let lists = [
        ("favorite_cuisines", &context.favorite_cuisines),
        ("favorite_atmospheres", &context.favorite_atmospheres),
        ("dietary_restrictions", &context.dietary_restrictions),
    ];
    for (field, values) in lists {
        if values.iter().any(|v| v.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "{field} must not contain blank entries"
            )));
        }
    }

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_defaults_to_conditional() {
        assert_eq!(Tier::default(), Tier::Conditional);
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("Personalized".parse::<Tier>().unwrap(), Tier::Personalized);
        assert!("premium".parse::<Tier>().is_err());
    }

    #[test]
    fn user_context_is_empty_ignores_whitespace_history() {
        let ctx = UserContext {
            visit_history: "  \n ".to_string(),
            ..UserContext::default()
        };
        assert!(ctx.is_empty());
    }

    #[test]
    fn user_context_with_dietary_restriction_is_not_empty() {
        let ctx = UserContext {
            dietary_restrictions: vec!["vegetarian".to_string()],
            ..UserContext::default()
        };
        assert!(!ctx.is_empty());
    }

    #[test]
    fn parse_user_context_reads_partial_yaml() {
        let yaml = "favorite_cuisines:\n  - Italian\nvisit_history: |\n  Trattoria Uno\n";
        let ctx = parse_user_context(yaml).unwrap();
        assert_eq!(ctx.favorite_cuisines, vec!["Italian".to_string()]);
        assert!(ctx.favorite_atmospheres.is_empty());
        assert_eq!(ctx.visit_history.trim(), "Trattoria Uno");
    }

    #[test]
    fn parse_user_context_accepts_empty_file() {
        assert!(parse_user_context("").unwrap().is_empty());
    }

    #[test]
    fn parse_user_context_rejects_blank_entries() {
        let yaml = "dietary_restrictions:\n  - ''\n";
        let err = parse_user_context(yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("dietary_restrictions")),
            "got: {err:?}"
        );
    }

    #[test]
    fn parse_user_context_rejects_malformed_yaml() {
        let err = parse_user_context("favorite_cuisines: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::ProfileFileParse(_)), "got: {err:?}");
    }

    #[test]
    fn load_user_context_reports_missing_file() {
        let err = load_user_context(Path::new("/nonexistent/profile.yaml")).unwrap_err();
        assert!(
            matches!(err, ConfigError::ProfileFileIo { ref path, .. } if path.contains("profile.yaml")),
            "got: {err:?}"
        );
    }
}

//! User-entered search criteria.
//!
//! Every enum carries a CLI-friendly slug (parsed with [`FromStr`]) and a
//! human label used when the criteria are written into a model prompt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive bounds on the number of diners in one search.
pub const MIN_PARTY_SIZE: u8 = 1;
pub const MAX_PARTY_SIZE: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("location must be non-empty")]
    EmptyLocation,

    #[error("party size {0} is outside {MIN_PARTY_SIZE}..={MAX_PARTY_SIZE}")]
    PartySizeOutOfRange(u32),

    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

/// Lowercases and folds `_`/space into `-` so `Fast Food`, `fast_food`
/// and `fast-food` all parse the same.
fn fold_slug(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

fn unknown<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    slug: fn(T) -> &'static str,
) -> CriteriaError {
    CriteriaError::UnknownValue {
        kind,
        value: value.to_string(),
        expected: all.iter().map(|v| slug(*v)).collect::<Vec<_>>().join(", "),
    }
}

// ---------------------------------------------------------------------------
// Cuisine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    #[default]
    Unspecified,
    Japanese,
    Sushi,
    Yakiniku,
    Ramen,
    Chinese,
    Italian,
    French,
    Korean,
    Ethnic,
    FastFood,
}

impl Cuisine {
    pub const ALL: [Cuisine; 11] = [
        Cuisine::Unspecified,
        Cuisine::Japanese,
        Cuisine::Sushi,
        Cuisine::Yakiniku,
        Cuisine::Ramen,
        Cuisine::Chinese,
        Cuisine::Italian,
        Cuisine::French,
        Cuisine::Korean,
        Cuisine::Ethnic,
        Cuisine::FastFood,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Cuisine::Unspecified => "unspecified",
            Cuisine::Japanese => "japanese",
            Cuisine::Sushi => "sushi",
            Cuisine::Yakiniku => "yakiniku",
            Cuisine::Ramen => "ramen",
            Cuisine::Chinese => "chinese",
            Cuisine::Italian => "italian",
            Cuisine::French => "french",
            Cuisine::Korean => "korean",
            Cuisine::Ethnic => "ethnic",
            Cuisine::FastFood => "fast-food",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Cuisine::Unspecified => "no preference",
            Cuisine::Japanese => "Japanese",
            Cuisine::Sushi => "sushi",
            Cuisine::Yakiniku => "yakiniku (Korean-style grill)",
            Cuisine::Ramen => "ramen",
            Cuisine::Chinese => "Chinese",
            Cuisine::Italian => "Italian",
            Cuisine::French => "French",
            Cuisine::Korean => "Korean",
            Cuisine::Ethnic => "ethnic / Asian",
            Cuisine::FastFood => "fast food",
        }
    }

    #[must_use]
    pub fn is_specified(self) -> bool {
        self != Cuisine::Unspecified
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cuisine {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_slug(s);
        if folded == "none" || folded == "any" {
            return Ok(Cuisine::Unspecified);
        }
        Cuisine::ALL
            .into_iter()
            .find(|c| c.slug() == folded)
            .ok_or_else(|| unknown("cuisine", s, &Cuisine::ALL, Cuisine::slug))
    }
}

// ---------------------------------------------------------------------------
// BudgetBand
// ---------------------------------------------------------------------------

/// Per-person budget band in yen. Variants are declared cheapest first so
/// the derived `Ord` follows price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBand {
    Under1000,
    From1000To3000,
    From3000To5000,
    From5000To10000,
    Over10000,
}

impl BudgetBand {
    pub const ALL: [BudgetBand; 5] = [
        BudgetBand::Under1000,
        BudgetBand::From1000To3000,
        BudgetBand::From3000To5000,
        BudgetBand::From5000To10000,
        BudgetBand::Over10000,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            BudgetBand::Under1000 => "under-1000",
            BudgetBand::From1000To3000 => "1000-3000",
            BudgetBand::From3000To5000 => "3000-5000",
            BudgetBand::From5000To10000 => "5000-10000",
            BudgetBand::Over10000 => "over-10000",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BudgetBand::Under1000 => "up to 1,000 yen per person",
            BudgetBand::From1000To3000 => "1,000-3,000 yen per person",
            BudgetBand::From3000To5000 => "3,000-5,000 yen per person",
            BudgetBand::From5000To10000 => "5,000-10,000 yen per person",
            BudgetBand::Over10000 => "10,000 yen or more per person",
        }
    }
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetBand {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_slug(s).replace(',', "");
        BudgetBand::ALL
            .into_iter()
            .find(|b| b.slug() == folded)
            .ok_or_else(|| unknown("budget", s, &BudgetBand::ALL, BudgetBand::slug))
    }
}

// ---------------------------------------------------------------------------
// Occasion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    #[default]
    Unspecified,
    Lunch,
    Dinner,
    Date,
    Family,
    Friends,
    Business,
    Anniversary,
}

impl Occasion {
    pub const ALL: [Occasion; 8] = [
        Occasion::Unspecified,
        Occasion::Lunch,
        Occasion::Dinner,
        Occasion::Date,
        Occasion::Family,
        Occasion::Friends,
        Occasion::Business,
        Occasion::Anniversary,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Occasion::Unspecified => "unspecified",
            Occasion::Lunch => "lunch",
            Occasion::Dinner => "dinner",
            Occasion::Date => "date",
            Occasion::Family => "family",
            Occasion::Friends => "friends",
            Occasion::Business => "business",
            Occasion::Anniversary => "anniversary",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Occasion::Unspecified => "no preference",
            Occasion::Lunch => "lunch",
            Occasion::Dinner => "dinner",
            Occasion::Date => "a date",
            Occasion::Family => "a family meal",
            Occasion::Friends => "a meal with friends",
            Occasion::Business => "a business meal",
            Occasion::Anniversary => "a special anniversary",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Occasion {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_slug(s);
        if folded == "none" || folded == "any" {
            return Ok(Occasion::Unspecified);
        }
        Occasion::ALL
            .into_iter()
            .find(|o| o.slug() == folded)
            .ok_or_else(|| unknown("occasion", s, &Occasion::ALL, Occasion::slug))
    }
}

// ---------------------------------------------------------------------------
// PartySize
// ---------------------------------------------------------------------------

/// Number of diners, always within `MIN_PARTY_SIZE..=MAX_PARTY_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u8")]
pub struct PartySize(u8);

impl PartySize {
    /// # Errors
    ///
    /// Returns [`CriteriaError::PartySizeOutOfRange`] outside `1..=20`.
    pub fn new(size: u32) -> Result<Self, CriteriaError> {
        u8::try_from(size)
            .ok()
            .filter(|n| (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(n))
            .map(PartySize)
            .ok_or(CriteriaError::PartySizeOutOfRange(size))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for PartySize {
    fn default() -> Self {
        PartySize(2)
    }
}

impl TryFrom<u32> for PartySize {
    type Error = CriteriaError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PartySize::new(value)
    }
}

impl From<PartySize> for u8 {
    fn from(value: PartySize) -> Self {
        value.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SearchCriteria
// ---------------------------------------------------------------------------

/// Everything the user entered for one search. Built once per search and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Station or area name, used as the directory keyword.
    pub location: String,
    pub cuisine: Cuisine,
    pub budget: BudgetBand,
    pub party_size: PartySize,
    pub occasion: Occasion,
    /// Free-text requests such as "private room" or "near the station".
    pub extra_requests: String,
}

impl SearchCriteria {
    /// Creates criteria with no cuisine or occasion preference, a party of
    /// two and no extra requests.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::EmptyLocation`] if `location` is blank.
    pub fn new(location: &str, budget: BudgetBand) -> Result<Self, CriteriaError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(CriteriaError::EmptyLocation);
        }
        Ok(Self {
            location: location.to_string(),
            cuisine: Cuisine::Unspecified,
            budget,
            party_size: PartySize::default(),
            occasion: Occasion::Unspecified,
            extra_requests: String::new(),
        })
    }

    #[must_use]
    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisine = cuisine;
        self
    }

    #[must_use]
    pub fn with_party_size(mut self, party_size: PartySize) -> Self {
        self.party_size = party_size;
        self
    }

    #[must_use]
    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = occasion;
        self
    }

    #[must_use]
    pub fn with_extra_requests(mut self, extra: &str) -> Self {
        self.extra_requests = extra.trim().to_string();
        self
    }
}

//! Mapping from search criteria to Hot Pepper master codes.

use dinerec_core::{BudgetBand, Cuisine};

/// Genre master code for a cuisine, or `None` when the cuisine has no
/// dedicated genre and must not narrow the search.
#[must_use]
pub fn genre_code(cuisine: Cuisine) -> Option<&'static str> {
    match cuisine {
        Cuisine::Unspecified | Cuisine::FastFood => None,
        // Sushi has no genre of its own; it is listed under washoku.
        Cuisine::Japanese | Cuisine::Sushi => Some("G004"),
        Cuisine::Yakiniku => Some("G008"),
        Cuisine::Ramen => Some("G013"),
        Cuisine::Chinese => Some("G007"),
        Cuisine::Italian | Cuisine::French => Some("G006"),
        Cuisine::Korean => Some("G017"),
        Cuisine::Ethnic => Some("G009"),
    }
}

/// Budget master codes covering a band. The API accepts at most two
/// `budget` parameters per request.
#[must_use]
pub fn budget_codes(band: BudgetBand) -> &'static [&'static str] {
    match band {
        // 〜500円, 501〜1000円
        BudgetBand::Under1000 => &["B009", "B010"],
        // 1501〜2000円, 2001〜3000円
        BudgetBand::From1000To3000 => &["B001", "B002"],
        // 3001〜4000円, 4001〜5000円
        BudgetBand::From3000To5000 => &["B003", "B008"],
        // 5001〜7000円, 7001〜10000円
        BudgetBand::From5000To10000 => &["B004", "B005"],
        // 10001〜15000円, 15001〜20000円
        BudgetBand::Over10000 => &["B006", "B012"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_cuisine_has_no_genre() {
        assert_eq!(genre_code(Cuisine::Unspecified), None);
    }

    #[test]
    fn ramen_maps_to_ramen_genre() {
        assert_eq!(genre_code(Cuisine::Ramen), Some("G013"));
    }

    #[test]
    fn every_budget_band_has_one_or_two_codes() {
        for band in BudgetBand::ALL {
            let codes = budget_codes(band);
            assert!(
                (1..=2).contains(&codes.len()),
                "{band:?} has {} codes",
                codes.len()
            );
        }
    }
}

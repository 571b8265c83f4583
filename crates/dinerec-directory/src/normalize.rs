//! Normalization of raw directory records into [`NormalizedVenue`].
//!
//! Normalization never fails. Absent text fields become placeholder text so
//! prompt and display code can use every field unconditionally; absent links
//! become empty strings.

use dinerec_core::NormalizedVenue;

use crate::types::RawVenueRecord;

/// Placeholder for identifying fields (name, cuisine, budget).
pub const UNKNOWN: &str = "unknown";
/// Placeholder for descriptive fields (access, address, tagline, hours).
pub const NO_INFO: &str = "no info";

/// Treats `None`, empty and whitespace-only strings alike.
fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn text_or(value: Option<&String>, placeholder: &str) -> String {
    non_blank(value).unwrap_or(placeholder).to_string()
}

/// Detail page URL: desktop first, then mobile, else `""`.
#[must_use]
pub fn resolve_url(record: &RawVenueRecord) -> String {
    let urls = record.urls.as_ref();
    non_blank(urls.and_then(|u| u.pc.as_ref()))
        .or_else(|| non_blank(urls.and_then(|u| u.mobile.as_ref())))
        .unwrap_or_default()
        .to_string()
}

/// Largest available photo, desktop sizes before mobile sizes, else `""`.
#[must_use]
pub fn resolve_photo(record: &RawVenueRecord) -> String {
    let Some(photo) = record.photo.as_ref() else {
        return String::new();
    };
    [photo.pc.as_ref(), photo.mobile.as_ref()]
        .into_iter()
        .flatten()
        .flat_map(|sizes| [sizes.l.as_ref(), sizes.m.as_ref(), sizes.s.as_ref()])
        .find_map(non_blank)
        .unwrap_or_default()
        .to_string()
}

/// Converts one raw record into a [`NormalizedVenue`] at the given 1-based
/// ordinal.
#[must_use]
pub fn normalize_venue(record: &RawVenueRecord, ordinal: usize) -> NormalizedVenue {
    let budget = record.budget.as_ref();
    let budget_text = non_blank(budget.and_then(|b| b.name.as_ref()))
        .or_else(|| non_blank(budget.and_then(|b| b.average.as_ref())))
        .unwrap_or(UNKNOWN)
        .to_string();

    NormalizedVenue {
        ordinal,
        directory_id: non_blank(record.id.as_ref())
            .unwrap_or_default()
            .to_string(),
        name: text_or(record.name.as_ref(), UNKNOWN),
        cuisine: text_or(record.genre.as_ref().and_then(|g| g.name.as_ref()), UNKNOWN),
        budget: budget_text,
        access: text_or(record.access.as_ref(), NO_INFO),
        address: text_or(record.address.as_ref(), NO_INFO),
        tagline: text_or(record.tagline.as_ref(), NO_INFO),
        hours: text_or(record.hours.as_ref(), NO_INFO),
        url: resolve_url(record),
        photo_url: resolve_photo(record),
    }
}

/// Normalizes a candidate list, numbering venues `1..=records.len()` in
/// the order given.
#[must_use]
pub fn normalize_candidates(records: &[RawVenueRecord]) -> Vec<NormalizedVenue> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| normalize_venue(record, idx + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Budget, Genre, Photo, PhotoSizes, VenueUrls};

    fn full_record() -> RawVenueRecord {
        RawVenueRecord {
            id: Some("J001".to_string()),
            name: Some("Sushi Hana".to_string()),
            genre: Some(Genre {
                code: Some("G004".to_string()),
                name: Some("和食".to_string()),
            }),
            budget: Some(Budget {
                code: Some("B002".to_string()),
                name: Some("2001～3000円".to_string()),
                average: Some("2500円".to_string()),
            }),
            access: Some("JR Shinjuku 5 min".to_string()),
            address: Some("Tokyo Shinjuku 3-1".to_string()),
            tagline: Some("Fresh fish daily".to_string()),
            hours: Some("17:00～23:00".to_string()),
            urls: Some(VenueUrls {
                pc: Some("https://example.com/pc".to_string()),
                mobile: Some("https://example.com/sp".to_string()),
            }),
            photo: Some(Photo {
                pc: Some(PhotoSizes {
                    l: Some("https://img/pc-l.jpg".to_string()),
                    m: None,
                    s: None,
                }),
                mobile: None,
            }),
        }
    }

    #[test]
    fn normalize_venue_copies_present_fields() {
        let venue = normalize_venue(&full_record(), 4);
        assert_eq!(venue.ordinal, 4);
        assert_eq!(venue.directory_id, "J001");
        assert_eq!(venue.name, "Sushi Hana");
        assert_eq!(venue.cuisine, "和食");
        assert_eq!(venue.budget, "2001～3000円");
        assert_eq!(venue.url, "https://example.com/pc");
        assert_eq!(venue.photo_url, "https://img/pc-l.jpg");
    }

    #[test]
    fn normalize_venue_fills_placeholders_for_empty_record() {
        let venue = normalize_venue(&RawVenueRecord::default(), 1);
        assert_eq!(venue.name, UNKNOWN);
        assert_eq!(venue.cuisine, UNKNOWN);
        assert_eq!(venue.budget, UNKNOWN);
        assert_eq!(venue.access, NO_INFO);
        assert_eq!(venue.address, NO_INFO);
        assert_eq!(venue.tagline, NO_INFO);
        assert_eq!(venue.hours, NO_INFO);
        assert_eq!(venue.url, "");
        assert_eq!(venue.photo_url, "");
        assert_eq!(venue.directory_id, "");
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let mut record = full_record();
        record.name = Some("   ".to_string());
        record.urls = Some(VenueUrls {
            pc: Some(String::new()),
            mobile: Some("https://example.com/sp".to_string()),
        });
        let venue = normalize_venue(&record, 1);
        assert_eq!(venue.name, UNKNOWN);
        assert_eq!(venue.url, "https://example.com/sp");
    }

    #[test]
    fn budget_falls_back_to_average() {
        let mut record = full_record();
        record.budget = Some(Budget {
            code: None,
            name: None,
            average: Some("2500円".to_string()),
        });
        assert_eq!(normalize_venue(&record, 1).budget, "2500円");
    }

    #[test]
    fn photo_falls_back_to_mobile_sizes() {
        let mut record = full_record();
        record.photo = Some(Photo {
            pc: Some(PhotoSizes::default()),
            mobile: Some(PhotoSizes {
                l: None,
                m: None,
                s: Some("https://img/sp-s.jpg".to_string()),
            }),
        });
        assert_eq!(resolve_photo(&record), "https://img/sp-s.jpg");
    }

    #[test]
    fn normalization_is_idempotent() {
        let record = full_record();
        assert_eq!(normalize_venue(&record, 2), normalize_venue(&record, 2));
        let empty = RawVenueRecord::default();
        assert_eq!(normalize_venue(&empty, 1), normalize_venue(&empty, 1));
    }

    #[test]
    fn normalize_candidates_numbers_from_one() {
        let records = vec![full_record(), RawVenueRecord::default(), full_record()];
        let venues = normalize_candidates(&records);
        let ordinals: Vec<usize> = venues.iter().map(|v| v.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }
}

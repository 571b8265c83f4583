//! Venue directory access: the Hot Pepper Gourmet search client, the
//! filter-relaxation query stage, and normalization of raw shop records.

pub mod client;
pub mod codes;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::HotpepperClient;
pub use error::DirectoryError;
pub use normalize::{normalize_candidates, normalize_venue};
pub use query::{
    fetch_candidates, AttemptFailure, DirectoryQuery, FilterLevel, QueryOutcome, VenueDirectory,
};
pub use types::RawVenueRecord;

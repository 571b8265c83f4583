//! Hot Pepper Gourmet search API response types.
//!
//! The API wraps every response in `{"results": {...}}`. A successful search
//! carries a `shop` array; a rejected request carries an `error` array
//! instead. Every shop field is optional here: the directory omits fields
//! freely and normalization fills the gaps.

use serde::{Deserialize, Serialize};

/// Top-level envelope: `{ "results": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub results: SearchResults,
}

#[derive(Debug, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub shop: Vec<RawVenueRecord>,
    #[serde(default)]
    pub error: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// One shop as returned by the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVenueRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub genre: Option<Genre>,
    pub budget: Option<Budget>,
    pub access: Option<String>,
    pub address: Option<String>,
    /// Short marketing tagline.
    #[serde(rename = "catch")]
    pub tagline: Option<String>,
    /// Opening hours as free text.
    #[serde(rename = "open")]
    pub hours: Option<String>,
    pub urls: Option<VenueUrls>,
    pub photo: Option<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub code: Option<String>,
    /// Band label, e.g. `"2001～3000円"`.
    pub name: Option<String>,
    /// Free-text average spend, e.g. `"ランチ：1000円"`.
    pub average: Option<String>,
}

/// Detail page links. `pc` is the desktop page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueUrls {
    pub pc: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub pc: Option<PhotoSizes>,
    pub mobile: Option<PhotoSizes>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSizes {
    pub l: Option<String>,
    pub m: Option<String>,
    pub s: Option<String>,
}

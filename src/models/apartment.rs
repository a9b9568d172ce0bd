use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ApartmentSummary — one `/search-apartments` hit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentSummary {
    #[serde(rename = "aptNm")]
    pub apt_nm: String,
    #[serde(rename = "umdNm")]
    pub umd_nm: String,
    pub location: String,
}

/// `/search-apartments` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub apartments: Vec<ApartmentSummary>,
}

/// `/get-area-buckets` success body. Buckets are whole square metres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaBuckets {
    #[serde(default, deserialize_with = "super::de::rounded_vec")]
    pub area_buckets: Vec<i64>,
}

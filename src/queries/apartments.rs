//! Apartment search and floor-area bucket lookups.

use serde_json::json;

use crate::config::Endpoint;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::{ApartmentSummary, AreaBuckets, SearchResults};
use crate::transport::Transport;

/// Bucket listing request for one apartment complex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaBucketsRequest {
    apt_nm: String,
}

impl AreaBucketsRequest {
    pub fn new(apt_nm: &str) -> Result<Self> {
        Ok(Self {
            apt_nm: super::apartment_name(apt_nm)?,
        })
    }

    pub fn apt_nm(&self) -> &str {
        &self.apt_nm
    }
}

// ---------------------------------------------------------------------------
// ApartmentQuery
// ---------------------------------------------------------------------------

/// Query interface for finding apartment complexes.
pub struct ApartmentQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> ApartmentQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Search complexes by free text.
    ///
    /// A blank query matches nothing and is answered locally.
    pub fn search(&self, query: &str) -> Envelope<Vec<ApartmentSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Envelope::Success(Vec::new());
        }
        let body = json!({ "query": query });
        super::call::<SearchResults>(self.transport, Endpoint::Search, Some(&body))
            .map(|results| results.apartments)
    }

    /// Floor-area buckets with recorded deals, in backend order.
    pub fn area_buckets(&self, request: &AreaBucketsRequest) -> Envelope<Vec<i64>> {
        let body = json!({ "aptNm": request.apt_nm });
        super::call::<AreaBuckets>(self.transport, Endpoint::AreaBuckets, Some(&body))
            .map(|buckets| buckets.area_buckets)
    }
}

mod classify;
mod collectors;
mod combine;
mod cookies;
mod headers;
mod origin;
mod privacy;

pub use classify::{has_response, is_non_get, is_redirection};
pub use collectors::CaptureContext;
pub use combine::combine_results;
pub use cookies::{TrackingCookie, parse_potential_tracking_cookie, set_cookie_values};
pub use headers::{header_value, header_values};
pub use origin::{RequestOrigin, non_get_origin};
pub use privacy::{PrivacyAnalyzer, collect_results};

use crate::har::Har;
use serde::{Deserialize, Serialize};

/// Privacy metrics for a single capture.
///
/// Field names are the keys of the per-capture JSON report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResults {
    pub num_reqs: usize,
    pub num_responses: usize,
    pub num_redirections: usize,
    pub num_cross_origin_redirections: usize,
    pub num_requests_w_cookies: usize,
    pub num_responses_w_cookies: usize,
    pub third_party_domains: Vec<String>,
    pub potential_tracking_cookies: Vec<TrackingCookie>,
    pub third_party_entities: Vec<String>,
    pub non_get_request_origins: Vec<RequestOrigin>,
}

/// Values present in every one of several captures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedResults {
    pub common_third_party_domains: Vec<String>,
    pub common_third_party_entities: Vec<String>,
    pub common_cookies: Vec<TrackingCookie>,
}

/// Knobs for the privacy analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Skip `Set-Cookie` values without a `;` or `=` instead of failing.
    pub lenient_cookies: bool,
}

pub trait Analyzer {
    type Output;

    fn analyze(&self, har: &Har) -> crate::Result<Self::Output>;
}

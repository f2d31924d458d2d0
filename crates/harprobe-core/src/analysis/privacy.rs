use super::collectors::{self, CaptureContext};
use super::{AnalysisOptions, Analyzer, CaptureResults};
use crate::domain::{DomainMap, DomainResolver, PslResolver};
use crate::har::Har;
use crate::{Error, Result};

/// Runs every metric collector over one capture.
pub struct PrivacyAnalyzer<'a, R = PslResolver> {
    domain_map: &'a DomainMap,
    resolver: R,
    options: AnalysisOptions,
}

impl<'a> PrivacyAnalyzer<'a> {
    pub fn new(domain_map: &'a DomainMap) -> Self {
        Self::with_resolver(domain_map, PslResolver)
    }
}

impl<'a, R: DomainResolver> PrivacyAnalyzer<'a, R> {
    pub fn with_resolver(domain_map: &'a DomainMap, resolver: R) -> Self {
        Self {
            domain_map,
            resolver,
            options: AnalysisOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }
}

impl<R: DomainResolver> Analyzer for PrivacyAnalyzer<'_, R> {
    type Output = CaptureResults;

    fn analyze(&self, har: &Har) -> Result<Self::Output> {
        tracing::debug!("Analyzing HAR privacy metrics");

        let page_url = har.log.page_url().ok_or_else(|| {
            Error::InvalidStructure("HAR has no pages to take the page URL from".to_string())
        })?;
        let first_party = self.resolver.registrable_domain(page_url)?;
        tracing::debug!("First-party domain: {}", first_party);

        let ctx = CaptureContext {
            log: &har.log,
            domain_map: self.domain_map,
            resolver: &self.resolver,
            first_party,
            options: self.options,
        };

        let results = CaptureResults {
            num_reqs: collectors::num_reqs(&ctx),
            num_responses: collectors::num_responses(&ctx),
            num_redirections: collectors::num_redirections(&ctx),
            num_cross_origin_redirections: collectors::num_cross_origin_redirections(&ctx),
            num_requests_w_cookies: collectors::num_requests_w_cookies(&ctx),
            num_responses_w_cookies: collectors::num_responses_w_cookies(&ctx),
            third_party_domains: collectors::third_party_domains(&ctx),
            potential_tracking_cookies: collectors::potential_tracking_cookies(&ctx)?,
            third_party_entities: collectors::third_party_entities(&ctx),
            non_get_request_origins: collectors::non_get_request_origins(&ctx)?,
        };

        tracing::info!(
            "Privacy analysis complete: {} requests, {} third-party domains, {} tracking cookies",
            results.num_reqs,
            results.third_party_domains.len(),
            results.potential_tracking_cookies.len()
        );

        Ok(results)
    }
}

/// Analyze a capture with the Public Suffix List resolver and default options
pub fn collect_results(har: &Har, domain_map: &DomainMap) -> Result<CaptureResults> {
    PrivacyAnalyzer::new(domain_map).analyze(har)
}

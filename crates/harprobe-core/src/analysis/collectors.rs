//! One function per reported metric.
//!
//! Collectors only read the capture; none depends on another's output.

use super::AnalysisOptions;
use super::classify::{has_response, is_non_get, is_redirection};
use super::cookies::{TrackingCookie, parse_potential_tracking_cookie, set_cookie_values};
use super::headers::header_value;
use super::origin::{RequestOrigin, non_get_origin};
use crate::domain::{DomainMap, DomainResolver};
use crate::har::{Entry, Log};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Everything a collector may look at for one capture
pub struct CaptureContext<'a> {
    pub log: &'a Log,
    pub domain_map: &'a DomainMap,
    pub resolver: &'a dyn DomainResolver,
    pub first_party: String,
    pub options: AnalysisOptions,
}

impl CaptureContext<'_> {
    fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.log.entries.iter()
    }

    /// Registrable domain of the entry's request URL, if it has one
    fn request_domain(&self, entry: &Entry) -> Option<String> {
        match self.resolver.registrable_domain(&entry.request.url) {
            Ok(domain) => Some(domain),
            Err(e) => {
                tracing::debug!("Skipping {}: {}", entry.request.url, e);
                None
            }
        }
    }
}

pub fn num_reqs(ctx: &CaptureContext) -> usize {
    ctx.log.entries.len()
}

pub fn num_responses(ctx: &CaptureContext) -> usize {
    ctx.entries().filter(|e| has_response(e)).count()
}

pub fn num_redirections(ctx: &CaptureContext) -> usize {
    ctx.entries().filter(|e| is_redirection(e)).count()
}

/// Redirections whose target lies on another registrable domain.
///
/// A redirect where either URL cannot be resolved is not counted.
pub fn num_cross_origin_redirections(ctx: &CaptureContext) -> usize {
    ctx.entries()
        .filter(|e| is_redirection(e))
        .filter(|e| {
            let from = ctx.resolver.registrable_domain(&e.request.url);
            let to = ctx.resolver.registrable_domain(&e.response.redirect_url);
            match (from, to) {
                (Ok(from), Ok(to)) => from != to,
                (Err(err), _) | (_, Err(err)) => {
                    tracing::debug!(
                        "Not counting redirect {} -> {}: {}",
                        e.request.url,
                        e.response.redirect_url,
                        err
                    );
                    false
                }
            }
        })
        .count()
}

pub fn num_requests_w_cookies(ctx: &CaptureContext) -> usize {
    ctx.entries()
        .filter(|e| header_value(&e.request.headers, "Cookie").is_some())
        .count()
}

pub fn num_responses_w_cookies(ctx: &CaptureContext) -> usize {
    ctx.entries()
        .filter(|e| header_value(&e.response.headers, "Set-Cookie").is_some())
        .count()
}

/// Registrable domains that answered a request, other than the first party
pub fn third_party_domains(ctx: &CaptureContext) -> Vec<String> {
    let domains: BTreeSet<String> = ctx
        .entries()
        .filter(|e| has_response(e))
        .filter_map(|e| ctx.request_domain(e))
        .filter(|domain| *domain != ctx.first_party)
        .collect();

    domains.into_iter().collect()
}

/// `SameSite=None` cookies set anywhere in the capture.
///
/// Malformed `Set-Cookie` values abort the analysis unless
/// [`AnalysisOptions::lenient_cookies`] is set.
pub fn potential_tracking_cookies(ctx: &CaptureContext) -> Result<Vec<TrackingCookie>> {
    let mut cookies = BTreeSet::new();

    for entry in ctx.entries() {
        let mut values = set_cookie_values(entry).peekable();
        if values.peek().is_none() {
            continue;
        }

        let Some(domain) = ctx.request_domain(entry) else {
            continue;
        };

        for raw in values {
            match parse_potential_tracking_cookie(raw, &domain) {
                Ok(Some(cookie)) => {
                    cookies.insert(cookie);
                }
                Ok(None) => {}
                Err(Error::MalformedCookie(value)) if ctx.options.lenient_cookies => {
                    tracing::warn!(
                        "Ignoring malformed Set-Cookie from {}: {:?}",
                        entry.request.url,
                        value
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(cookies.into_iter().collect())
}

/// Display names of the known organisations behind third-party requests
pub fn third_party_entities(ctx: &CaptureContext) -> Vec<String> {
    let entities: BTreeSet<String> = ctx
        .entries()
        .filter_map(|e| ctx.request_domain(e))
        .filter(|domain| *domain != ctx.first_party)
        .filter_map(|domain| ctx.domain_map.get(&domain))
        .map(|entity| entity.display_name.clone())
        .collect();

    entities.into_iter().collect()
}

pub fn non_get_request_origins(ctx: &CaptureContext) -> Result<Vec<RequestOrigin>> {
    let origins = ctx
        .entries()
        .filter(|e| is_non_get(e))
        .map(non_get_origin)
        .collect::<Result<BTreeSet<_>>>()?;

    Ok(origins.into_iter().collect())
}

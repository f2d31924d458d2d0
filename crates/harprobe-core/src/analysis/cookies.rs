use super::headers::header_values;
use crate::har::Entry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Attribute marking a cookie as sendable in cross-site requests
const SAME_SITE_NONE: &str = "SameSite=None";

/// A cookie that browsers will send cross-site, keyed by the registrable
/// domain of the request that set it.
///
/// Serialized as a `[name, value, domain]` array.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    from = "(String, String, String)",
    into = "(String, String, String)"
)]
pub struct TrackingCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
}

impl TrackingCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
        }
    }
}

impl From<(String, String, String)> for TrackingCookie {
    fn from((name, value, domain): (String, String, String)) -> Self {
        Self {
            name,
            value,
            domain,
        }
    }
}

impl From<TrackingCookie> for (String, String, String) {
    fn from(cookie: TrackingCookie) -> Self {
        (cookie.name, cookie.value, cookie.domain)
    }
}

/// Extract a potential tracking cookie from a raw `Set-Cookie` value.
///
/// The value is split on the first `;` into `name=value` and the attribute
/// list, then the pair on its first `=`. Only cookies whose attribute list
/// contains the literal `SameSite=None` are returned. The attribute check is
/// a plain substring search, so `SameSite=None` appearing inside another
/// attribute's value also matches.
///
/// A value lacking either separator is reported as [`Error::MalformedCookie`].
pub fn parse_potential_tracking_cookie(
    raw: &str,
    request_domain: &str,
) -> Result<Option<TrackingCookie>> {
    let (pair, attributes) = raw
        .split_once(';')
        .ok_or_else(|| Error::MalformedCookie(raw.to_string()))?;
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| Error::MalformedCookie(raw.to_string()))?;

    if !attributes.contains(SAME_SITE_NONE) {
        return Ok(None);
    }

    Ok(Some(TrackingCookie::new(name, value, request_domain)))
}

/// Raw value of every `Set-Cookie` header on the entry's response, in
/// capture order. Values are passed through unchanged.
pub fn set_cookie_values(entry: &Entry) -> impl Iterator<Item = &str> {
    header_values(&entry.response.headers, "Set-Cookie").into_iter()
}

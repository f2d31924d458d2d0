use crate::har::Entry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Scheme, port and host a state-changing request was sent to.
///
/// Serialized as a `[scheme, port, host]` array.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(String, u16, String)", into = "(String, u16, String)")]
pub struct RequestOrigin {
    pub scheme: String,
    pub port: u16,
    pub host: String,
}

impl RequestOrigin {
    pub fn new(scheme: impl Into<String>, port: u16, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            port,
            host: host.into(),
        }
    }
}

impl From<(String, u16, String)> for RequestOrigin {
    fn from((scheme, port, host): (String, u16, String)) -> Self {
        Self { scheme, port, host }
    }
}

impl From<RequestOrigin> for (String, u16, String) {
    fn from(origin: RequestOrigin) -> Self {
        (origin.scheme, origin.port, origin.host)
    }
}

/// Origin of a non-GET request.
///
/// The port is the scheme's default, never the one in the URL. Schemes other
/// than `http` and `https` are rejected with [`Error::UnsupportedScheme`].
pub fn non_get_origin(entry: &Entry) -> Result<RequestOrigin> {
    let raw = &entry.request.url;
    let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;

    let port = match url.scheme() {
        "https" => 443,
        "http" => 80,
        other => {
            return Err(Error::UnsupportedScheme {
                scheme: other.to_string(),
                url: raw.clone(),
            });
        }
    };

    let host = url
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(format!("{}: missing host", raw)))?;

    Ok(RequestOrigin::new(url.scheme(), port, host))
}

//! Registrable-domain resolution and the domain → entity lookup table.

mod entity;

pub use entity::{DomainMap, Entity};

use thiserror::Error;
use url::{Host, Url};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainResolutionError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("host is an IP address: {0}")]
    IpAddress(String),

    #[error("no registrable domain for host {0}")]
    NoRegistrableDomain(String),
}

/// Maps a URL to its registrable domain ("eTLD+1").
pub trait DomainResolver {
    fn registrable_domain(&self, url: &str) -> Result<String, DomainResolutionError>;
}

/// Resolver backed by the compiled-in Public Suffix List.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver;

impl DomainResolver for PslResolver {
    fn registrable_domain(&self, url: &str) -> Result<String, DomainResolutionError> {
        let parsed = Url::parse(url).map_err(|source| DomainResolutionError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(DomainResolutionError::UnsupportedScheme(other.to_string())),
        }

        let host = match parsed.host() {
            Some(Host::Domain(host)) => host,
            Some(Host::Ipv4(addr)) => return Err(DomainResolutionError::IpAddress(addr.to_string())),
            Some(Host::Ipv6(addr)) => return Err(DomainResolutionError::IpAddress(addr.to_string())),
            None => return Err(DomainResolutionError::MissingHost(url.to_string())),
        };

        match psl::domain(host.as_bytes()) {
            Some(root) => Ok(String::from_utf8_lossy(root.as_bytes()).to_string()),
            None => Err(DomainResolutionError::NoRegistrableDomain(host.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(url: &str) -> Result<String, DomainResolutionError> {
        PslResolver.registrable_domain(url)
    }

    #[test]
    fn test_strips_subdomains() {
        assert_eq!(resolve("https://a.b.c.example.com/path").unwrap(), "example.com");
        assert_eq!(resolve("http://www.example.com:8080/x?y=1").unwrap(), "example.com");
    }

    #[test]
    fn test_multi_label_public_suffix() {
        assert_eq!(resolve("https://sub.example.co.uk/").unwrap(), "example.co.uk");
    }

    #[test]
    fn test_host_is_lowercased() {
        assert_eq!(resolve("https://CDN.Example.COM/").unwrap(), "example.com");
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(matches!(
            resolve("not-a-url"),
            Err(DomainResolutionError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert_eq!(
            resolve("data:image/png;base64,AAAA"),
            Err(DomainResolutionError::UnsupportedScheme("data".to_string()))
        );
        assert!(matches!(
            resolve("chrome-extension://abcdef/script.js"),
            Err(DomainResolutionError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_ip_hosts() {
        assert!(matches!(
            resolve("http://192.168.1.10/admin"),
            Err(DomainResolutionError::IpAddress(_))
        ));
        assert!(matches!(
            resolve("http://[::1]:8080/"),
            Err(DomainResolutionError::IpAddress(_))
        ));
    }

    #[test]
    fn test_rejects_bare_suffix() {
        assert!(matches!(
            resolve("http://localhost:3000/"),
            Err(DomainResolutionError::NoRegistrableDomain(_))
        ));
    }
}

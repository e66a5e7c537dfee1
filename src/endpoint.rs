//! Endpoint resolution for the Bbox REST API.
//!
//! Every call targets `/api/v1/<family>[/<suffix>]`, either on the router's
//! LAN address over plain HTTP or on the vendor's remote relay over HTTPS.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use url::Url;

use crate::{BboxError, BboxResult};

/// Address the router answers on from the LAN.
pub const DEFAULT_LOCAL_ADDRESS: &str = "192.168.1.254";

/// Host of the vendor relay used for remote access.
pub const REMOTE_HOST: &str = "mabbox.bytel.fr";

/// Port of the vendor relay used for remote access.
pub const REMOTE_PORT: u16 = 443;

/// Version component of every API path.
pub const API_VERSION: &str = "v1";

/// Top-level resource categories of the router API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    Device,
    Hosts,
    Lan,
    Wan,
    Nat,
    Login,
    Logout,
}

impl ApiFamily {
    /// All families, in the order the router documents them.
    pub const ALL: [ApiFamily; 7] = [
        ApiFamily::Device,
        ApiFamily::Hosts,
        ApiFamily::Lan,
        ApiFamily::Wan,
        ApiFamily::Nat,
        ApiFamily::Login,
        ApiFamily::Logout,
    ];

    /// Path segment used for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiFamily::Device => "device",
            ApiFamily::Hosts => "hosts",
            ApiFamily::Lan => "lan",
            ApiFamily::Wan => "wan",
            ApiFamily::Nat => "nat",
            ApiFamily::Login => "login",
            ApiFamily::Logout => "logout",
        }
    }
}

impl fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiFamily {
    type Err = BboxError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ApiFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == name)
            .ok_or_else(|| BboxError::ConfigurationError(format!("Unknown API family: {name:?}")))
    }
}

/// Whether the router is reached on the LAN or through the remote relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Local,
    Remote,
}

impl AccessMode {
    /// Numeric code used by the router documentation (0 local, 1 remote).
    pub fn code(&self) -> u8 {
        match self {
            AccessMode::Local => 0,
            AccessMode::Remote => 1,
        }
    }

    /// Infers the access mode from a configured address.
    ///
    /// Private, loopback and link-local IP literals (with an optional port)
    /// and `localhost` select [`AccessMode::Local`]; the relay host selects
    /// [`AccessMode::Remote`]. Any other address is rejected.
    pub fn detect(address: &str) -> BboxResult<AccessMode> {
        Authority::parse(address).map(|authority| authority.mode)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Local => f.write_str("local"),
            AccessMode::Remote => f.write_str("remote"),
        }
    }
}

/// A family plus the optional sub-resource path and/or query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub family: ApiFamily,
    pub suffix: Option<String>,
}

impl EndpointDescriptor {
    pub fn new(family: ApiFamily) -> Self {
        Self {
            family,
            suffix: None,
        }
    }

    /// Appends `suffix` after the family, e.g. `xdsl/stats` or
    /// `rules?btoken=...`.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{}/{}", self.family, suffix),
            None => write!(f, "{}", self.family),
        }
    }
}

/// Normalized host[:port] together with the mode it implies.
#[derive(Debug, Clone)]
struct Authority {
    host: String,
    mode: AccessMode,
}

impl Authority {
    fn parse(address: &str) -> BboxResult<Self> {
        let trimmed = address.trim();
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed)
            .trim_end_matches('/');

        if host.is_empty() {
            return Err(BboxError::ConfigurationError("Router address is required".into()));
        }

        let remote_with_port = format!("{REMOTE_HOST}:{REMOTE_PORT}");
        if host.eq_ignore_ascii_case(REMOTE_HOST) || host.eq_ignore_ascii_case(&remote_with_port) {
            return Ok(Self {
                host: REMOTE_HOST.to_string(),
                mode: AccessMode::Remote,
            });
        }

        let ip = if let Ok(ip) = host.parse::<IpAddr>() {
            Some(ip)
        } else {
            host.parse::<SocketAddr>().ok().map(|socket| socket.ip())
        };

        match ip {
            Some(ip) if is_local_ip(&ip) => {
                // Bare IPv6 literals need brackets to sit in a URL authority.
                let host = match host.parse::<IpAddr>() {
                    Ok(IpAddr::V6(v6)) => format!("[{v6}]"),
                    _ => host.to_string(),
                };
                Ok(Self {
                    host,
                    mode: AccessMode::Local,
                })
            }
            Some(ip) => Err(BboxError::ConfigurationError(format!(
                "{ip} is not a local address; use {REMOTE_HOST} for remote access"
            ))),
            None if host == "localhost" || host.starts_with("localhost:") => Ok(Self {
                host: host.to_string(),
                mode: AccessMode::Local,
            }),
            None => Err(BboxError::ConfigurationError(format!(
                "Unrecognized router address: {address:?}"
            ))),
        }
    }
}

fn is_local_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local(),
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            v6.is_loopback() || (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
        }
    }
}

/// Builds absolute endpoint URLs for one router.
///
/// The access mode and address are captured once and never change; build a
/// new client to switch between local and remote access.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    mode: AccessMode,
    base: Url,
}

impl UrlBuilder {
    /// Creates a builder for `address`, detecting the access mode from it.
    pub fn new(address: &str) -> BboxResult<Self> {
        let authority = Authority::parse(address)?;
        let base = match authority.mode {
            AccessMode::Local => format!("http://{}/api/{API_VERSION}", authority.host),
            AccessMode::Remote => {
                format!("https://{REMOTE_HOST}:{REMOTE_PORT}/api/{API_VERSION}")
            }
        };
        let base = Url::parse(&base).map_err(|e| {
            BboxError::ConfigurationError(format!("Invalid router address {address:?}: {e}"))
        })?;

        Ok(Self {
            mode: authority.mode,
            base,
        })
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Resolves `endpoint` to an absolute URL.
    ///
    /// Empty path segments in the suffix are dropped, and anything after the
    /// first `?` becomes the query string.
    pub fn build(&self, endpoint: &EndpointDescriptor) -> BboxResult<Url> {
        let (path, query) = match endpoint.suffix.as_deref() {
            Some(suffix) => match suffix.split_once('?') {
                Some((path, query)) => (path, Some(query)),
                None => (suffix, None),
            },
            None => ("", None),
        };

        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                BboxError::ConfigurationError(format!("{} cannot carry a path", self.base))
            })?;
            segments.pop_if_empty();
            segments.push(endpoint.family.as_str());
            segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        url.set_query(query.filter(|query| !query.is_empty()));

        Ok(url)
    }
}

//! Session state and the access gate run before every request.
//!
//! The router checks credentials more strictly when it is reached through the
//! remote relay, so each [`Endpoint`] carries one required level per access
//! mode. The gate is a purely local check: a token that the router has since
//! expired still passes and the resulting HTTP status is left to the caller.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoint::{AccessMode, ApiFamily, EndpointDescriptor};
use crate::{BboxError, BboxResult};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "BBOX_ID";

/// Minimum session state an endpoint requires.
///
/// Ordered as the router numbers them (0, 1, 2): `None < Private < Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthLevel {
    /// Bootstrap calls that run before any session exists.
    None,
    /// Requires an open session.
    Private,
    /// Open to anyone.
    Public,
}

impl fmt::Display for AuthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthLevel::None => f.write_str("NONE"),
            AuthLevel::Private => f.write_str("PRIVATE"),
            AuthLevel::Public => f.write_str("PUBLIC"),
        }
    }
}

/// Required levels for local and remote access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub local: AuthLevel,
    pub remote: AuthLevel,
}

impl AccessPolicy {
    pub const fn new(local: AuthLevel, remote: AuthLevel) -> Self {
        Self { local, remote }
    }

    /// Level that applies in `mode`.
    pub fn required(&self, mode: AccessMode) -> AuthLevel {
        match mode {
            AccessMode::Local => self.local,
            AccessMode::Remote => self.remote,
        }
    }
}

const OPEN_LOCALLY: AccessPolicy = AccessPolicy::new(AuthLevel::Public, AuthLevel::Private);
const PRIVATE: AccessPolicy = AccessPolicy::new(AuthLevel::Private, AuthLevel::Private);

/// Every operation the client exposes, keyed to its family and policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    DeviceInfo,
    DeviceDisplay,
    DeviceReboot,
    DeviceToken,
    DeviceLog,
    Hosts,
    LanIp6,
    LanIp,
    NatRules,
    Login,
    Logout,
    WanXdsl,
    WanXdslStats,
    WanIpStats,
}

impl Endpoint {
    pub fn family(&self) -> ApiFamily {
        match self {
            Endpoint::DeviceInfo
            | Endpoint::DeviceDisplay
            | Endpoint::DeviceReboot
            | Endpoint::DeviceToken
            | Endpoint::DeviceLog => ApiFamily::Device,
            Endpoint::Hosts => ApiFamily::Hosts,
            Endpoint::LanIp6 | Endpoint::LanIp => ApiFamily::Lan,
            Endpoint::NatRules => ApiFamily::Nat,
            Endpoint::Login => ApiFamily::Login,
            Endpoint::Logout => ApiFamily::Logout,
            Endpoint::WanXdsl | Endpoint::WanXdslStats | Endpoint::WanIpStats => ApiFamily::Wan,
        }
    }

    /// The access policy the router enforces for this operation.
    pub fn policy(&self) -> AccessPolicy {
        match self {
            Endpoint::DeviceInfo
            | Endpoint::Hosts
            | Endpoint::WanXdsl
            | Endpoint::WanXdslStats
            | Endpoint::WanIpStats => OPEN_LOCALLY,
            Endpoint::DeviceDisplay
            | Endpoint::DeviceReboot
            | Endpoint::DeviceToken
            | Endpoint::DeviceLog
            | Endpoint::LanIp6
            | Endpoint::LanIp
            | Endpoint::NatRules => PRIVATE,
            Endpoint::Login => AccessPolicy::new(AuthLevel::None, AuthLevel::None),
            Endpoint::Logout => AccessPolicy::new(AuthLevel::Public, AuthLevel::Public),
        }
    }

    /// Descriptor for this operation, with an optional per-call suffix.
    pub fn descriptor(&self, suffix: Option<String>) -> EndpointDescriptor {
        EndpointDescriptor {
            family: self.family(),
            suffix,
        }
    }
}

/// Authentication state of one client.
///
/// Holds the token issued by the last successful login; it is never
/// persisted.
#[derive(Default)]
pub struct Session {
    token: Option<SecretString>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_ref().is_some_and(|token| !token.expose_secret().is_empty())
    }

    pub(crate) fn token(&self) -> Option<&SecretString> {
        self.token.as_ref().filter(|token| !token.expose_secret().is_empty())
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(SecretString::from(token.into()));
    }

    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Decides whether a call governed by `policy` may proceed in `mode`.
    pub fn authorize(&self, policy: AccessPolicy, mode: AccessMode) -> BboxResult<()> {
        let required = policy.required(mode);
        match required {
            AuthLevel::Public | AuthLevel::None => Ok(()),
            AuthLevel::Private if self.is_authenticated() => Ok(()),
            AuthLevel::Private => {
                log::warn!("refusing {required} call in {mode} mode: no session");
                Err(BboxError::AuthenticationRequired { required, mode })
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

//! # bbox-client
//!
//! A Rust client library for the administration API of Bouygues Telecom Bbox
//! routers.
//!
//! The client reaches the router either on the LAN (`http://192.168.1.254`)
//! or through the vendor relay (`https://mabbox.bytel.fr`). The mode follows
//! from the configured address and decides which calls need an open session.
//!
//! ## Features
//!
//! - 🔐 Cookie based sessions with a local access check before each call
//! - 📡 Device, LAN, WAN and NAT-PMP operations
//! - 🔄 Async API with Tokio runtime support
//! - 🛡️ Comprehensive error handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use bbox_client::BboxClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = BboxClient::builder().address("192.168.1.254").build()?;
//!
//!     // Public on the LAN, no session needed.
//!     println!("line up: {}", client.is_bbox_connected().await?);
//!
//!     client.login("admin-password").await?;
//!     client.set_display_luminosity(30).await?;
//!     client.logout().await?;
//!
//!     Ok(())
//! }
//! ```

mod api;
mod auth;
mod client;
mod endpoint;
mod error;
pub mod models;

pub use auth::{AccessPolicy, AuthLevel, Endpoint, Session, SESSION_COOKIE};
pub use client::{BboxClient, BboxClientBuilder};
pub use endpoint::{
    AccessMode, ApiFamily, EndpointDescriptor, UrlBuilder, API_VERSION, DEFAULT_LOCAL_ADDRESS,
    REMOTE_HOST, REMOTE_PORT,
};
pub use error::{BboxError, BboxResult};
pub use models::lan::Host;
pub use models::nat::{NatProtocol, NatRule, NatRuleBuilder};
pub use models::wan::{BandwidthStats, IpStats, XdslDirection, XdslInfo};

//! Data models for the Bbox API.
//!
//! Documents the client does not inspect are passed through as
//! [`serde_json::Value`]; the types here cover the fields the client relies on
//! and the form bodies it sends.

pub mod api_response;
pub mod auth;
pub mod device;
pub mod lan;
pub mod nat;
pub mod wan;

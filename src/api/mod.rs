//! Router operations, grouped by API family.
//!
//! Each module adds inherent methods to [`crate::BboxClient`]; the request
//! plumbing stays in `client.rs`.

mod account;
mod device;
mod lan;
mod nat;
mod wan;

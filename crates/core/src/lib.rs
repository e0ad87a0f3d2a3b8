//! Domain logic for the Kavalan Sentinel bio-safety feed.
//!
//! Everything here is pure: no HTTP, no I/O beyond reading the clock. The
//! `api` crate owns the transport and calls into these modules per request.

pub mod error;
pub mod feed;
pub mod registry;
pub mod rng;
pub mod subject;
pub mod types;
pub mod vitals;

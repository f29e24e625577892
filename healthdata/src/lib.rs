//! Country-level public-health statistics pipeline: fetch a JSON array
//! of per-country records from an HTTP endpoint, normalize it into a
//! fixed-column dataset, memoize it per endpoint URL for the process
//! lifetime, and expose cascading filters and sum-based summaries over
//! the result.
//!
//! The crate is presentation-agnostic: it hands out plain data
//! ([`types::Dataset`], filtered row slices, [`summary::Summary`]) and
//! leaves rendering to whoever owns the [`service::HealthStats`] handle.

pub mod cache;
pub mod client;
pub mod errors;
pub mod filter;
pub mod normalize;
pub mod service;
pub mod summary;
pub mod types;

#[cfg(test)]
pub(crate) mod testutils;

pub use errors::{FetchError, Result};
pub use service::HealthStats;

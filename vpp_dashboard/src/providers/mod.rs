//! Persistence backend abstraction.
//!
//! This module defines the [`CustomerBackend`] trait, the interface through
//! which the dashboard loads and stores customer rows. The backend is an
//! external collaborator: the dashboard only ever calls [`fetch_all`] and
//! [`insert`], and treats any error as a cue to fall back to local data.
//!
//! Implementations:
//! - [`supabase::SupabaseBackend`]: a hosted PostgREST table over HTTPS.
//! - [`memory::InMemoryBackend`]: an in-process table, handy for tests and
//!   offline runs.
//!
//! The trait is async and object safe, so a backend can be picked at runtime
//! and held as `Box<dyn CustomerBackend>`.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use vpp_dashboard::models::{customer::CustomerRow, registration::InsertPayload};
//! use vpp_dashboard::providers::{CustomerBackend, ProviderError};
//!
//! struct NullBackend;
//!
//! #[async_trait]
//! impl CustomerBackend for NullBackend {
//!     async fn fetch_all(&self) -> Result<Vec<CustomerRow>, ProviderError> {
//!         Ok(vec![])
//!     }
//!
//!     async fn insert(&self, _payload: &InsertPayload) -> Result<(), ProviderError> {
//!         Ok(())
//!     }
//! }
//! ```
//!
//! [`fetch_all`]: CustomerBackend::fetch_all
//! [`insert`]: CustomerBackend::insert

pub mod memory;
pub mod supabase;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{customer::CustomerRow, registration::InsertPayload};

/// Load and store customer rows in a persistence backend.
#[async_trait]
pub trait CustomerBackend: Send + Sync {
    /// Fetches every customer row, newest first.
    async fn fetch_all(&self) -> Result<Vec<CustomerRow>, ProviderError>;

    /// Persists one new customer row.
    ///
    /// Not idempotent: calling twice stores two rows.
    async fn insert(&self, payload: &InsertPayload) -> Result<(), ProviderError>;
}

#[async_trait]
impl<T> CustomerBackend for Box<T>
where
    T: CustomerBackend + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<CustomerRow>, ProviderError> {
        (**self).fetch_all().await
    }

    async fn insert(&self, payload: &InsertPayload) -> Result<(), ProviderError> {
        (**self).insert(payload).await
    }
}

/// Errors that can occur during the creation of a backend instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// Access key contains characters not allowed in an HTTP header.
    #[snafu(display("Invalid access key format: {source}"))]
    InvalidAccessKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `CustomerBackend` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// Network failure, timeout, or an undecodable response body.
    #[snafu(display("Backend request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The backend answered with a non-success status.
    #[snafu(display("Backend rejected the request ({status}): {message}"))]
    Api {
        status: u16,
        message: String,
        backtrace: Backtrace,
    },

    /// The backend is known to be unreachable.
    #[snafu(display("Backend unavailable: {message}"))]
    Unavailable {
        message: String,
        backtrace: Backtrace,
    },
}

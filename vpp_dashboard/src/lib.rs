//! Operations dashboard for registered energy-resource customers.
//!
//! Customers (solar, storage, EV-charging and other demand sites) are loaded
//! from a hosted backend into a [`store::CustomerStore`], which derives the
//! per-city statistics table and chart series through
//! [`aggregation::recompute`]. [`dashboard::Dashboard`] wires the two
//! together and degrades to demo or session-only data whenever the backend
//! misbehaves.

#[cfg(feature = "cli")]
pub mod cli;
pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod demo;
pub mod errors;
pub mod masking;
pub mod models;
pub mod providers;
pub mod render;
pub mod store;

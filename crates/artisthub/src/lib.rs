//! Domain library for the ArtistHub booking marketplace.
//!
//! Everything runs against a simulated in-memory gateway: there is no real
//! backend, persistence, or authentication. The [`marketplace`] module carries
//! the catalog, filtering, onboarding, and review workflows; [`config`],
//! [`telemetry`], and [`error`] supply the service plumbing.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;

//! Marketplace workflows: catalog browsing, artist onboarding, and submission
//! review, all served by a simulated in-memory gateway.

pub mod catalog;
pub mod controller;
pub mod filter;
pub mod gateway;
pub mod onboarding;
pub mod review;
pub mod router;
pub mod store;
pub mod submission;

pub use catalog::{Artist, ArtistId, CategoryInfo};
pub use controller::{CatalogController, FetchOutcome};
pub use filter::{FilterOptions, FilterValue};
pub use gateway::{BookingGateway, GatewayError, LatencyProfile, MockGateway};
pub use onboarding::{
    ApplicationDraft, FormField, FormStep, OnboardingForm, SubmitError, ValidationError,
};
pub use review::{DashboardStats, ReviewController, StatusFilter};
pub use router::marketplace_router;
pub use store::{reduce, AppAction, AppState, SharedState};
pub use submission::{ApplicationPayload, ArtistSubmission, SubmissionAck, SubmissionId, SubmissionStatus};

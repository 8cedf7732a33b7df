use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use super::catalog::{seed_catalog, Artist};
use super::filter::FilterOptions;
use super::submission::{
    seed_submissions, ApplicationPayload, ArtistSubmission, SubmissionAck, SubmissionId,
    SubmissionStatus,
};
use crate::config::{GatewayConfig, GatewayLatency};

/// Error surface of the data gateway. The mock only ever produces
/// [`GatewayError::Network`]; fakes use [`GatewayError::Unavailable`] to script
/// other failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("network error occurred, please try again")]
    Network,
    #[error("gateway unavailable: {0}")]
    Unavailable(String),
}

/// Seam between the UI-facing controllers and the (simulated) backend, so the
/// production mock and deterministic test fakes are interchangeable.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Gateway-side filtered catalog listing, in catalog insertion order.
    async fn list_artists(&self, filters: &FilterOptions) -> Result<Vec<Artist>, GatewayError>;

    /// The full submission list, verbatim.
    async fn list_submissions(&self) -> Result<Vec<ArtistSubmission>, GatewayError>;

    /// Accepts any payload; validation is the caller's job.
    async fn submit_application(
        &self,
        payload: ApplicationPayload,
    ) -> Result<SubmissionAck, GatewayError>;

    /// Unconditional status update: no existence check, no transition rules,
    /// redundant transitions included.
    async fn set_submission_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<(), GatewayError>;
}

/// Simulated per-operation network delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub artists: Duration,
    pub submissions: Duration,
    pub application: Duration,
    pub status_update: Duration,
}

impl LatencyProfile {
    /// The delays the legacy mock API shipped with.
    pub const fn realistic() -> Self {
        Self {
            artists: Duration::from_millis(800),
            submissions: Duration::from_millis(600),
            application: Duration::from_millis(1500),
            status_update: Duration::from_millis(300),
        }
    }

    /// Zero delay everywhere, for demos and deterministic tests.
    pub const fn instant() -> Self {
        Self {
            artists: Duration::ZERO,
            submissions: Duration::ZERO,
            application: Duration::ZERO,
            status_update: Duration::ZERO,
        }
    }
}

impl From<GatewayLatency> for LatencyProfile {
    fn from(value: GatewayLatency) -> Self {
        match value {
            GatewayLatency::Realistic => Self::realistic(),
            GatewayLatency::Instant => Self::instant(),
        }
    }
}

/// Acknowledgement copy shown on the onboarding success screen.
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Application submitted successfully! We'll review it within 24 hours.";

/// In-memory stand-in for a real booking backend: static data, simulated
/// latency, and probabilistic submission failures for exercising UI error
/// paths.
pub struct MockGateway {
    catalog: Vec<Artist>,
    submissions: Vec<ArtistSubmission>,
    latency: LatencyProfile,
    failure_rate: f64,
}

impl MockGateway {
    pub fn new(latency: LatencyProfile, failure_rate: f64) -> Self {
        Self::with_data(seed_catalog(), seed_submissions(), latency, failure_rate)
    }

    pub fn with_data(
        catalog: Vec<Artist>,
        submissions: Vec<ArtistSubmission>,
        latency: LatencyProfile,
        failure_rate: f64,
    ) -> Self {
        Self {
            catalog,
            submissions,
            latency,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.latency.into(), config.failure_rate)
    }

    /// Seed data, zero latency, no simulated failures.
    pub fn deterministic() -> Self {
        Self::new(LatencyProfile::instant(), 0.0)
    }

    async fn simulate(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn submission_fails(&self) -> bool {
        self.failure_rate > 0.0 && rand::rng().random::<f64>() < self.failure_rate
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(LatencyProfile::realistic(), 0.1)
    }
}

#[async_trait]
impl BookingGateway for MockGateway {
    async fn list_artists(&self, filters: &FilterOptions) -> Result<Vec<Artist>, GatewayError> {
        self.simulate(self.latency.artists).await;
        Ok(self
            .catalog
            .iter()
            .filter(|artist| filters.matches(artist))
            .cloned()
            .collect())
    }

    async fn list_submissions(&self) -> Result<Vec<ArtistSubmission>, GatewayError> {
        self.simulate(self.latency.submissions).await;
        Ok(self.submissions.clone())
    }

    async fn submit_application(
        &self,
        payload: ApplicationPayload,
    ) -> Result<SubmissionAck, GatewayError> {
        self.simulate(self.latency.application).await;

        if self.submission_fails() {
            tracing::warn!(applicant = %payload.name, "simulated network failure on application submit");
            return Err(GatewayError::Network);
        }

        tracing::info!(applicant = %payload.name, "artist application received");
        Ok(SubmissionAck {
            success: true,
            message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        })
    }

    async fn set_submission_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<(), GatewayError> {
        self.simulate(self.latency.status_update).await;
        tracing::info!(submission = %id.0, status = status.label(), "submission status updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::filter::FilterOptions;
    use crate::marketplace::submission::SubmissionId;

    #[tokio::test]
    async fn unfiltered_listing_returns_whole_catalog() {
        let gateway = MockGateway::deterministic();
        let artists = gateway
            .list_artists(&FilterOptions::unfiltered())
            .await
            .expect("listing succeeds");
        assert_eq!(artists.len(), seed_catalog().len());
    }

    #[tokio::test]
    async fn category_filter_narrows_listing() {
        let gateway = MockGateway::deterministic();
        let filters = FilterOptions::from_params(Some("Singers"), None, None);
        let artists = gateway.list_artists(&filters).await.expect("listing");
        assert_eq!(artists.len(), 2);
        assert!(artists
            .iter()
            .all(|artist| artist.categories.iter().any(|c| c == "Singers")));
    }

    #[tokio::test]
    async fn submit_never_fails_with_zero_failure_rate() {
        let gateway = MockGateway::deterministic();
        for _ in 0..20 {
            let ack = gateway
                .submit_application(ApplicationPayload::default())
                .await
                .expect("deterministic gateway never fails");
            assert!(ack.success);
        }
    }

    #[tokio::test]
    async fn submit_always_fails_with_full_failure_rate() {
        let gateway =
            MockGateway::with_data(Vec::new(), Vec::new(), LatencyProfile::instant(), 1.0);
        let err = gateway
            .submit_application(ApplicationPayload::default())
            .await
            .expect_err("rate 1.0 always fails");
        assert!(matches!(err, GatewayError::Network));
    }

    #[tokio::test]
    async fn status_update_accepts_unknown_ids_and_redundant_transitions() {
        let gateway = MockGateway::deterministic();
        gateway
            .set_submission_status(&SubmissionId("no-such-id".to_string()), SubmissionStatus::Approved)
            .await
            .expect("unconditional update");
        gateway
            .set_submission_status(&SubmissionId("2".to_string()), SubmissionStatus::Approved)
            .await
            .expect("redundant transition accepted");
    }
}

use std::sync::Arc;

use super::gateway::{BookingGateway, GatewayError};
use super::store::{reduce, AppAction, SharedState};
use super::submission::{ArtistSubmission, SubmissionId, SubmissionStatus};

const LOAD_ERROR_MESSAGE: &str = "Failed to load submissions";

/// Status filter for the review table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SubmissionStatus),
}

impl StatusFilter {
    /// Normalize a raw selector; unknown values fall back to `All`, matching
    /// the "all" sentinel convention of the catalog filters.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(SubmissionStatus::parse)
            .map_or(Self::All, Self::Only)
    }
}

/// Pure derived view: the subset matching the filter, in original order.
pub fn filter_by_status(
    submissions: &[ArtistSubmission],
    filter: StatusFilter,
) -> Vec<ArtistSubmission> {
    submissions
        .iter()
        .filter(|submission| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => submission.status == status,
        })
        .cloned()
        .collect()
}

/// Aggregate counters for the dashboard header cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl DashboardStats {
    pub fn collect(submissions: &[ArtistSubmission]) -> Self {
        let mut stats = Self {
            total: submissions.len(),
            ..Self::default()
        };
        for submission in submissions {
            match submission.status {
                SubmissionStatus::Pending => stats.pending += 1,
                SubmissionStatus::Approved => stats.approved += 1,
                SubmissionStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    pub fn approval_rate(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.approved as f32 / self.total as f32
        }
    }
}

/// Manager-side controller for the submission review table.
pub struct ReviewController<G> {
    state: SharedState,
    gateway: Arc<G>,
}

impl<G> ReviewController<G>
where
    G: BookingGateway,
{
    pub fn new(state: SharedState, gateway: Arc<G>) -> Self {
        Self { state, gateway }
    }

    /// Replace the shared submission list wholesale. On failure the previous
    /// list stays and the error is recorded.
    pub async fn load_submissions(&self) -> Result<(), GatewayError> {
        {
            let mut state = self.state.lock().expect("state mutex poisoned");
            reduce(&mut state, AppAction::SetLoading(true));
        }

        match self.gateway.list_submissions().await {
            Ok(submissions) => {
                let mut state = self.state.lock().expect("state mutex poisoned");
                reduce(&mut state, AppAction::SetSubmissions(submissions));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission fetch failed");
                let mut state = self.state.lock().expect("state mutex poisoned");
                reduce(
                    &mut state,
                    AppAction::SetError(Some(LOAD_ERROR_MESSAGE.to_string())),
                );
                Err(err)
            }
        }
    }

    /// Push the transition through the gateway, then patch the single matching
    /// record in place; no refetch. On failure nothing changes and the error
    /// propagates for the caller's transient notification.
    pub async fn set_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<(), GatewayError> {
        self.gateway.set_submission_status(id, status).await?;

        let mut state = self.state.lock().expect("state mutex poisoned");
        reduce(
            &mut state,
            AppAction::UpdateSubmissionStatus {
                id: id.clone(),
                status,
            },
        );
        Ok(())
    }

    /// Derived view of the shared list under a status filter.
    pub fn visible(&self, filter: StatusFilter) -> Vec<ArtistSubmission> {
        let state = self.state.lock().expect("state mutex poisoned");
        filter_by_status(&state.submissions, filter)
    }

    pub fn stats(&self) -> DashboardStats {
        let state = self.state.lock().expect("state mutex poisoned");
        DashboardStats::collect(&state.submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::submission::seed_submissions;

    #[test]
    fn all_filter_returns_everything_in_order() {
        let submissions = seed_submissions();
        let visible = filter_by_status(&submissions, StatusFilter::All);
        assert_eq!(visible, submissions);
    }

    #[test]
    fn status_filter_preserves_original_order() {
        let submissions = seed_submissions();
        let pending = filter_by_status(&submissions, StatusFilter::Only(SubmissionStatus::Pending));
        let ids: Vec<_> = pending.iter().map(|s| s.id.0.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn unknown_filter_param_falls_back_to_all() {
        assert_eq!(StatusFilter::from_param(Some("all")), StatusFilter::All);
        assert_eq!(StatusFilter::from_param(Some("bogus")), StatusFilter::All);
        assert_eq!(StatusFilter::from_param(None), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_param(Some("rejected")),
            StatusFilter::Only(SubmissionStatus::Rejected)
        );
    }

    #[test]
    fn stats_count_by_status() {
        let stats = DashboardStats::collect(&seed_submissions());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.rejected, 0);
        assert!((stats.approval_rate() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn approval_rate_of_empty_list_is_zero() {
        assert_eq!(DashboardStats::collect(&[]).approval_rate(), 0.0);
    }
}

use std::sync::{Arc, Mutex};

use super::catalog::Artist;
use super::filter::FilterOptions;
use super::submission::{ArtistSubmission, SubmissionId, SubmissionStatus};

/// Single snapshot of client-visible state, shared across views. Created once
/// with empty defaults and lives for the process; a restart is the only reset.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Replaced wholesale on every successful catalog fetch.
    pub artists: Vec<Artist>,
    /// Replaced wholesale on load, then patched in place on status changes.
    pub submissions: Vec<ArtistSubmission>,
    pub filters: FilterOptions,
    pub loading: bool,
    /// Last catalog fetch error; cleared by the next successful fetch.
    pub error: Option<String>,
}

impl AppState {
    pub fn shared() -> SharedState {
        Arc::new(Mutex::new(Self::default()))
    }
}

/// State shared between controllers. All mutation goes through [`reduce`].
pub type SharedState = Arc<Mutex<AppState>>;

/// Transition kinds over [`AppState`].
#[derive(Debug, Clone)]
pub enum AppAction {
    SetArtists(Vec<Artist>),
    SetSubmissions(Vec<ArtistSubmission>),
    UpdateFilters(FilterOptions),
    SetLoading(bool),
    SetError(Option<String>),
    UpdateSubmissionStatus {
        id: SubmissionId,
        status: SubmissionStatus,
    },
}

/// Pure transition function keyed by action kind.
pub fn reduce(state: &mut AppState, action: AppAction) {
    match action {
        AppAction::SetArtists(artists) => {
            state.artists = artists;
            state.loading = false;
            state.error = None;
        }
        AppAction::SetSubmissions(submissions) => {
            state.submissions = submissions;
            state.loading = false;
        }
        AppAction::UpdateFilters(filters) => {
            state.filters = filters;
        }
        AppAction::SetLoading(loading) => {
            state.loading = loading;
        }
        AppAction::SetError(error) => {
            state.error = error;
            state.loading = false;
        }
        AppAction::UpdateSubmissionStatus { id, status } => {
            if let Some(submission) = state
                .submissions
                .iter_mut()
                .find(|submission| submission.id == id)
            {
                submission.status = status;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::catalog::seed_catalog;
    use crate::marketplace::submission::seed_submissions;

    #[test]
    fn set_artists_clears_loading_and_error() {
        let mut state = AppState {
            loading: true,
            error: Some("Failed to load artists".to_string()),
            ..AppState::default()
        };
        reduce(&mut state, AppAction::SetArtists(seed_catalog()));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.artists.len(), 6);
    }

    #[test]
    fn set_error_retains_previous_artists() {
        let mut state = AppState::default();
        reduce(&mut state, AppAction::SetArtists(seed_catalog()));
        reduce(
            &mut state,
            AppAction::SetError(Some("Failed to load artists".to_string())),
        );
        assert_eq!(state.artists.len(), 6);
        assert_eq!(state.error.as_deref(), Some("Failed to load artists"));
        assert!(!state.loading);
    }

    #[test]
    fn status_patch_touches_only_the_matching_record() {
        let mut state = AppState::default();
        reduce(&mut state, AppAction::SetSubmissions(seed_submissions()));
        let before = state.submissions.clone();

        reduce(
            &mut state,
            AppAction::UpdateSubmissionStatus {
                id: SubmissionId("3".to_string()),
                status: SubmissionStatus::Approved,
            },
        );

        for (patched, original) in state.submissions.iter().zip(&before) {
            if original.id.0 == "3" {
                assert_eq!(patched.status, SubmissionStatus::Approved);
                assert_eq!(patched.name, original.name);
                assert_eq!(patched.submitted_at, original.submitted_at);
            } else {
                assert_eq!(patched, original);
            }
        }
    }

    #[test]
    fn status_patch_with_unknown_id_is_a_no_op() {
        let mut state = AppState::default();
        reduce(&mut state, AppAction::SetSubmissions(seed_submissions()));
        let before = state.submissions.clone();
        reduce(
            &mut state,
            AppAction::UpdateSubmissionStatus {
                id: SubmissionId("missing".to_string()),
                status: SubmissionStatus::Rejected,
            },
        );
        assert_eq!(state.submissions, before);
    }
}

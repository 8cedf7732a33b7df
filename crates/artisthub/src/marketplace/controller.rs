use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::filter::FilterOptions;
use super::gateway::BookingGateway;
use super::store::{reduce, AppAction, SharedState};

const FETCH_ERROR_MESSAGE: &str = "Failed to load artists";

/// How a catalog fetch concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the shared artist list.
    Applied,
    /// A newer fetch was issued while this one was in flight; the response was
    /// discarded.
    Stale,
    /// The gateway failed; the previous artist list is untouched and the error
    /// message is stored.
    Failed,
}

/// Drives catalog fetches from filter changes. Every filter edit issues exactly
/// one fetch; responses carry a monotonically increasing sequence number and
/// only the latest issued fetch may write back, so an out-of-order completion
/// can never clobber a newer result.
pub struct CatalogController<G> {
    state: SharedState,
    gateway: Arc<G>,
    fetch_seq: AtomicU64,
}

impl<G> CatalogController<G>
where
    G: BookingGateway,
{
    pub fn new(state: SharedState, gateway: Arc<G>) -> Self {
        Self {
            state,
            gateway,
            fetch_seq: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Initial load: seed filters from the optional query-style parameters
    /// (each defaulting to "all" when absent) and fetch.
    pub async fn initialize(
        &self,
        category: Option<&str>,
        location: Option<&str>,
        price_range: Option<&str>,
    ) -> FetchOutcome {
        self.apply_filters(FilterOptions::from_params(category, location, price_range))
            .await
    }

    /// Re-fetch with the currently stored filters.
    pub async fn refresh(&self) -> FetchOutcome {
        let filters = {
            let state = self.state.lock().expect("state mutex poisoned");
            state.filters.clone()
        };
        self.apply_filters(filters).await
    }

    /// Record the new filters and issue one fetch for them.
    pub async fn apply_filters(&self, filters: FilterOptions) -> FetchOutcome {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().expect("state mutex poisoned");
            reduce(&mut state, AppAction::UpdateFilters(filters.clone()));
            reduce(&mut state, AppAction::SetLoading(true));
        }

        let result = self.gateway.list_artists(&filters).await;

        let mut state = self.state.lock().expect("state mutex poisoned");
        if seq != self.fetch_seq.load(Ordering::SeqCst) {
            // A newer fetch owns the loading flag and the list now.
            tracing::debug!(seq, "discarding stale catalog response");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(artists) => {
                tracing::debug!(seq, count = artists.len(), "catalog fetch applied");
                reduce(&mut state, AppAction::SetArtists(artists));
                FetchOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "catalog fetch failed");
                reduce(
                    &mut state,
                    AppAction::SetError(Some(FETCH_ERROR_MESSAGE.to_string())),
                );
                FetchOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::gateway::MockGateway;
    use crate::marketplace::store::AppState;

    #[tokio::test]
    async fn initialize_defaults_to_unfiltered() {
        let state = AppState::shared();
        let controller = CatalogController::new(state.clone(), Arc::new(MockGateway::deterministic()));

        let outcome = controller.initialize(None, None, None).await;
        assert_eq!(outcome, FetchOutcome::Applied);

        let state = state.lock().expect("lock");
        assert_eq!(state.filters, FilterOptions::unfiltered());
        assert_eq!(state.artists.len(), 6);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn all_sentinels_seed_unset_filters() {
        let state = AppState::shared();
        let controller = CatalogController::new(state.clone(), Arc::new(MockGateway::deterministic()));

        controller
            .initialize(Some("all"), Some("all"), Some("all"))
            .await;

        let state = state.lock().expect("lock");
        assert_eq!(state.filters, FilterOptions::unfiltered());
    }

    #[tokio::test]
    async fn refresh_reuses_stored_filters() {
        let state = AppState::shared();
        let controller = CatalogController::new(state.clone(), Arc::new(MockGateway::deterministic()));

        controller
            .apply_filters(FilterOptions::from_params(Some("Dancers"), None, None))
            .await;
        let first = state.lock().expect("lock").artists.clone();

        let outcome = controller.refresh().await;
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(state.lock().expect("lock").artists, first);
    }
}

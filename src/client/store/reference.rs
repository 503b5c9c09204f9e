//! Shared state for the discoverer/observatory reference tables and the
//! aggregate stats cards.

#[cfg(feature = "web")]
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::model::catalog::{DiscovererDto, ObservatoryDto, StatsDto};

#[derive(Clone, Debug, Default)]
pub struct ReferenceState {
    pub discoverers: Vec<DiscovererDto>,
    pub observatories: Vec<ObservatoryDto>,
    pub stats: Option<StatsDto>,
    pub fetched: bool,
    pub error: Option<String>,
}

/// Fetch the reference data once per page load; the three requests run
/// concurrently and a failure in one does not discard the others
#[cfg(feature = "web")]
pub async fn load_reference(mut state: Signal<ReferenceState>) {
    use crate::client::util::api;

    let (discoverers, observatories, stats) = futures::join!(
        api::get_discoverers(),
        api::get_observatories(),
        api::get_stats(),
    );

    let mut current = state.write();
    current.fetched = true;

    match discoverers {
        Ok(discoverers) => current.discoverers = discoverers,
        Err(err) => {
            tracing::error!("{err}");
            current.error = Some(err);
        }
    }
    match observatories {
        Ok(observatories) => current.observatories = observatories,
        Err(err) => {
            tracing::error!("{err}");
            current.error = Some(err);
        }
    }
    match stats {
        Ok(stats) => current.stats = Some(stats),
        Err(err) => {
            tracing::error!("{err}");
            current.error = Some(err);
        }
    }
}

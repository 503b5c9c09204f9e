//! Shared dashboard state for the object list, filters, and detail panel.

use std::collections::HashSet;

#[cfg(feature = "web")]
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::util::api::ObjectsRequest;
use crate::model::catalog::{ObjectDetailDto, ObjectSummaryDto};

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub objects: Vec<ObjectSummaryDto>,
    pub loading: bool,
    pub error: Option<String>,
    /// Filter values as currently applied (not the in-progress form inputs)
    pub filters: ObjectsRequest,
    pub selected_id: Option<i32>,
    pub detail: Option<ObjectDetailDto>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
    /// Photo ids whose image failed to load for the current selection
    pub broken_photos: HashSet<i32>,
}

/// Selection upkeep after a list refresh: keep the current selection if it is
/// still listed, otherwise fall back to the first row, or clear when the list
/// is empty.
pub fn next_selection(objects: &[ObjectSummaryDto], current: Option<i32>) -> Option<i32> {
    if let Some(id) = current {
        if objects.iter().any(|object| object.id == id) {
            return Some(id);
        }
    }
    objects.first().map(|object| object.id)
}

/// Fetch the object list for the applied filters, then reconcile the
/// selection against the new rows
#[cfg(feature = "web")]
pub async fn load_objects(mut state: Signal<CatalogState>) {
    let request = {
        let mut current = state.write();
        current.loading = true;
        current.error = None;
        current.filters.clone()
    };

    match crate::client::util::api::get_objects(&request).await {
        Ok(objects) => {
            let selection = next_selection(&objects, state.read().selected_id);
            {
                let mut current = state.write();
                current.objects = objects;
                current.loading = false;
            }
            select_object(state, selection).await;
        }
        Err(err) => {
            tracing::error!("{err}");
            let mut current = state.write();
            current.loading = false;
            current.error = Some(err);
        }
    }
}

/// Change the selection and fetch its detail payload.
///
/// The response is discarded when the selection has moved on by the time it
/// arrives, so a slow earlier fetch can never overwrite a newer one.
#[cfg(feature = "web")]
pub async fn select_object(mut state: Signal<CatalogState>, id: Option<i32>) {
    {
        let mut current = state.write();
        current.selected_id = id;
        current.detail = None;
        current.detail_error = None;
        current.broken_photos.clear();
    }

    let Some(id) = id else {
        state.write().detail_loading = false;
        return;
    };

    state.write().detail_loading = true;

    let result = crate::client::util::api::get_object_detail(id).await;

    if state.read().selected_id != Some(id) {
        // Stale response for a superseded selection
        return;
    }

    let mut current = state.write();
    current.detail_loading = false;
    match result {
        Ok(detail) => {
            current.detail = Some(detail);
        }
        Err(err) => {
            tracing::error!("{err}");
            current.detail_error = Some(err);
        }
    }
}

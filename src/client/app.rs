use dioxus::prelude::*;

use crate::client::{
    router::Route,
    store::{catalog::CatalogState, reference::ReferenceState},
};

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(CatalogState::default()));
    use_context_provider(|| Signal::new(ReferenceState::default()));

    rsx!(Router::<Route> {})
}

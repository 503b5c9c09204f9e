use dioxus::prelude::*;

use crate::client::store::catalog::CatalogState;
use crate::client::util::api::ObjectsRequest;

/// Swap in the new filters and refresh the list
fn apply(mut state: Signal<CatalogState>, request: ObjectsRequest) {
    state.write().filters = request;

    #[cfg(feature = "web")]
    spawn(async move {
        crate::client::store::catalog::load_objects(state).await;
    });
}

#[component]
pub fn FilterBar() -> Element {
    let state = use_context::<Signal<CatalogState>>();

    let mut object_type = use_signal(String::new);
    let mut habitable = use_signal(String::new);
    let mut search = use_signal(String::new);

    let on_apply = move |_| {
        apply(
            state,
            ObjectsRequest {
                object_type: object_type.read().clone(),
                habitable: habitable.read().clone(),
                search: search.read().clone(),
            },
        );
    };

    let on_reset = move |_| {
        object_type.set(String::new());
        habitable.set(String::new());
        search.set(String::new());
        apply(state, ObjectsRequest::default());
    };

    rsx!(
        div {
            class: "card bg-base-200 shadow",
            div {
                class: "card-body flex-row flex-wrap items-end gap-4 p-4",
                label { class: "form-control",
                    div { class: "label",
                        span { class: "label-text", "Type" }
                    }
                    select {
                        class: "select select-bordered select-sm",
                        value: "{object_type}",
                        onchange: move |event| object_type.set(event.value()),
                        option { value: "", "All types" }
                        option { value: "Star", "Star" }
                        option { value: "Planet", "Planet" }
                        option { value: "Galaxy", "Galaxy" }
                    }
                }
                label { class: "form-control",
                    div { class: "label",
                        span { class: "label-text", "Habitability" }
                    }
                    select {
                        class: "select select-bordered select-sm",
                        value: "{habitable}",
                        onchange: move |event| habitable.set(event.value()),
                        option { value: "", "All" }
                        option { value: "true", "Habitable" }
                        option { value: "false", "Non-habitable" }
                    }
                }
                label { class: "form-control grow",
                    div { class: "label",
                        span { class: "label-text", "Search by name" }
                    }
                    input {
                        class: "input input-bordered input-sm w-full",
                        r#type: "text",
                        placeholder: "e.g. Proxima",
                        value: "{search}",
                        oninput: move |event| search.set(event.value()),
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                apply(
                                    state,
                                    ObjectsRequest {
                                        object_type: object_type.read().clone(),
                                        habitable: habitable.read().clone(),
                                        search: search.read().clone(),
                                    },
                                );
                            }
                        },
                    }
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: on_apply,
                        "Apply"
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: on_reset,
                        "Reset"
                    }
                }
            }
        }
    )
}

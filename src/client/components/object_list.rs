use dioxus::prelude::*;

use crate::client::store::catalog::CatalogState;
use crate::client::util::format::{format_distance, format_number};
use crate::model::catalog::DiscovererRefDto;

/// Compact credit line: up to two names, then a "+N" overflow suffix
fn discoverer_label(discoverers: &[DiscovererRefDto]) -> String {
    if discoverers.is_empty() {
        return "Unknown".to_string();
    }

    let names: Vec<&str> = discoverers
        .iter()
        .take(2)
        .map(|discoverer| discoverer.name.as_str())
        .collect();
    let label = names.join(", ");

    if discoverers.len() > 2 {
        format!("{label} +{}", discoverers.len() - 2)
    } else {
        label
    }
}

fn select(state: Signal<CatalogState>, id: i32) {
    #[cfg(feature = "web")]
    spawn(async move {
        crate::client::store::catalog::select_object(state, Some(id)).await;
    });
    #[cfg(not(feature = "web"))]
    let _ = (state, id);
}

#[component]
pub fn ObjectList() -> Element {
    let state = use_context::<Signal<CatalogState>>();

    let current = state.read();

    rsx!(
        div {
            class: "card bg-base-200 shadow w-full lg:max-w-96",
            div {
                class: "card-body p-4 gap-2",
                h2 {
                    class: "card-title",
                    "Objects"
                    span { class: "badge badge-neutral",
                        "{current.objects.len()}"
                    }
                }
                if let Some(error) = current.error.as_ref() {
                    div { class: "alert alert-error",
                        "{error}"
                    }
                } else if current.loading {
                    div { class: "flex flex-col gap-2",
                        div { class: "skeleton h-20 w-full" }
                        div { class: "skeleton h-20 w-full" }
                        div { class: "skeleton h-20 w-full" }
                    }
                } else if current.objects.is_empty() {
                    p { class: "text-sm opacity-70",
                        "No objects match the current filters."
                    }
                } else {
                    ul {
                        class: "flex flex-col gap-2 max-h-[520px] overflow-y-auto",
                        {current.objects.iter().map(|object| {
                            let id = object.id;
                            let selected = current.selected_id == Some(id);
                            let card_class = if selected {
                                "card bg-base-100 border border-primary cursor-pointer"
                            } else {
                                "card bg-base-100 cursor-pointer"
                            };

                            rsx!(
                                li {
                                    key: "{id}",
                                    div {
                                        class: card_class,
                                        onclick: move |_| select(state, id),
                                        div {
                                            class: "card-body p-3 gap-1",
                                            div { class: "flex items-center justify-between gap-2",
                                                p { class: "font-semibold",
                                                    "{object.name}"
                                                }
                                                span { class: "badge badge-outline",
                                                    "{object.object_type}"
                                                }
                                            }
                                            p { class: "text-xs opacity-70",
                                                "Distance: {format_distance(object.distance_light_years)}"
                                            }
                                            p { class: "text-xs opacity-70",
                                                "Magnitude: {format_number(object.magnitude)}"
                                            }
                                            p { class: "text-xs opacity-70",
                                                "Discovered by: {discoverer_label(&object.discoverers)}"
                                            }
                                            if object.is_habitable {
                                                span { class: "badge badge-success badge-sm",
                                                    "Habitable"
                                                }
                                            }
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
            }
        }
    )
}

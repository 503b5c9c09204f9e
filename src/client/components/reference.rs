use dioxus::prelude::*;

use crate::client::store::reference::ReferenceState;
use crate::client::util::format::format_text;

#[component]
pub fn DiscovererTable() -> Element {
    let reference = use_context::<Signal<ReferenceState>>();

    let current = reference.read();

    rsx!(
        div {
            class: "card bg-base-200 shadow",
            div {
                class: "card-body p-4 gap-2",
                h2 { class: "card-title", "Discoverers" }
                if !current.fetched {
                    div { class: "skeleton h-32 w-full" }
                } else if current.discoverers.is_empty() {
                    p { class: "text-sm opacity-70",
                        "No discoverers on record."
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-sm",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Nationality" }
                                    th { "Born" }
                                    th { "Discoveries" }
                                    th { "Objects" }
                                }
                            }
                            tbody {
                                {current.discoverers.iter().map(|discoverer| {
                                    let born = discoverer
                                        .birth_year
                                        .map(|year| year.to_string())
                                        .unwrap_or_else(|| "Unknown".to_string());
                                    let objects = if discoverer.objects.is_empty() {
                                        "None".to_string()
                                    } else {
                                        discoverer
                                            .objects
                                            .iter()
                                            .map(|object| object.object_name.as_str())
                                            .collect::<Vec<_>>()
                                            .join(", ")
                                    };

                                    rsx!(
                                        tr {
                                            key: "{discoverer.id}",
                                            td { "{discoverer.name}" }
                                            td { "{format_text(discoverer.nationality.as_deref())}" }
                                            td { "{born}" }
                                            td { "{discoverer.total_discoveries}" }
                                            td { "{objects}" }
                                        }
                                    )
                                })}
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn ObservatoryTable() -> Element {
    let reference = use_context::<Signal<ReferenceState>>();

    let current = reference.read();

    rsx!(
        div {
            class: "card bg-base-200 shadow",
            div {
                class: "card-body p-4 gap-2",
                h2 { class: "card-title", "Observatories" }
                if !current.fetched {
                    div { class: "skeleton h-32 w-full" }
                } else if current.observatories.is_empty() {
                    p { class: "text-sm opacity-70",
                        "No observatories on record."
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-sm",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Location" }
                                    th { "Country" }
                                    th { "Established" }
                                    th { "Observations" }
                                    th { "Objects observed" }
                                }
                            }
                            tbody {
                                {current.observatories.iter().map(|observatory| {
                                    let established = observatory
                                        .established_year
                                        .map(|year| year.to_string())
                                        .unwrap_or_else(|| "Unknown".to_string());

                                    rsx!(
                                        tr {
                                            key: "{observatory.id}",
                                            td { "{observatory.name}" }
                                            td { "{format_text(observatory.location.as_deref())}" }
                                            td { "{format_text(observatory.country.as_deref())}" }
                                            td { "{established}" }
                                            td { "{observatory.total_observations}" }
                                            td { "{observatory.total_objects}" }
                                        }
                                    )
                                })}
                            }
                        }
                    }
                }
            }
        }
    )
}

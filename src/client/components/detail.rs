use dioxus::prelude::*;

use crate::client::gallery::visible_photos;
use crate::client::store::catalog::CatalogState;
use crate::client::util::format::{
    format_bool, format_date, format_datetime, format_distance, format_number,
    format_temperature, format_text,
};
use crate::model::catalog::{DiscoveryDto, ObjectDetailDto, ObservationDto};

#[component]
pub fn DetailPanel() -> Element {
    let state = use_context::<Signal<CatalogState>>();

    let current = state.read();

    rsx!(
        div {
            class: "card bg-base-200 shadow w-full",
            div {
                class: "card-body p-4 gap-4",
                if current.detail_loading {
                    div { class: "flex flex-col gap-2",
                        div { class: "skeleton h-8 w-64" }
                        div { class: "skeleton h-32 w-full" }
                        div { class: "skeleton h-32 w-full" }
                    }
                } else if let Some(error) = current.detail_error.as_ref() {
                    div { class: "alert alert-error",
                        "{error}"
                    }
                } else if let Some(detail) = current.detail.as_ref() {
                    DetailBody { detail: detail.clone() }
                } else {
                    p { class: "opacity-70",
                        "Select an object to see its details."
                    }
                }
            }
        }
    )
}

#[component]
fn DetailBody(detail: ObjectDetailDto) -> Element {
    let summary = &detail.summary;
    let is_star = summary.object_type == "Star";

    rsx!(
        div { class: "flex items-center gap-2",
            h2 { class: "card-title text-2xl",
                "{summary.name}"
            }
            span { class: "badge badge-outline",
                "{summary.object_type}"
            }
            if summary.is_habitable {
                span { class: "badge badge-success",
                    "Habitable"
                }
            }
        }

        div { class: "grid grid-cols-2 md:grid-cols-3 gap-2",
            MetricCell { label: "Distance", value: format_distance(summary.distance_light_years) }
            MetricCell { label: "Magnitude", value: format_number(summary.magnitude) }
            MetricCell { label: "Temperature", value: format_temperature(summary.temperature_kelvin) }
            MetricCell { label: "Solar mass", value: format_number(summary.solar_mass) }
            MetricCell { label: "Habitable", value: format_bool(summary.is_habitable).to_string() }
            MetricCell { label: "Cataloged", value: format_datetime(Some(summary.created_at)) }
            if is_star {
                MetricCell { label: "Spectral class", value: format_text(summary.spectral_class.as_deref()) }
                MetricCell { label: "Luminosity", value: format_number(summary.luminosity) }
                MetricCell { label: "Radius (solar)", value: format_number(summary.radius_solar) }
            }
        }

        PhotoGallery { photos: detail.photos.clone() }

        DiscoverySection { discoveries: detail.discoveries.clone() }

        ObservationSection { observations: detail.observations.clone() }
    )
}

#[component]
fn MetricCell(label: &'static str, value: String) -> Element {
    rsx!(
        div { class: "bg-base-100 rounded p-2",
            p { class: "text-xs opacity-70",
                "{label}"
            }
            p { class: "font-semibold",
                "{value}"
            }
        }
    )
}

#[component]
fn PhotoGallery(photos: Vec<crate::model::catalog::PhotoDto>) -> Element {
    let state = use_context::<Signal<CatalogState>>();

    let visible = {
        let current = state.read();
        visible_photos(&photos, &current.broken_photos)
    };

    if visible.is_empty() {
        return rsx!(
            div {
                h3 { class: "font-semibold", "Photos" }
                p { class: "text-sm opacity-70",
                    "No photos available."
                }
            }
        );
    }

    rsx!(
        div {
            h3 { class: "font-semibold mb-2", "Photos" }
            ul {
                class: "flex flex-wrap gap-2",
                {visible.iter().map(|photo| {
                    let id = photo.id;
                    let mut state = state;
                    let caption = format_text(photo.caption.as_deref());

                    rsx!(
                        li {
                            key: "{id}",
                            div { class: "relative",
                                img {
                                    class: "w-40 h-40 object-cover rounded",
                                    src: "{photo.url}",
                                    alt: "{caption}",
                                    onerror: move |_| {
                                        state.write().broken_photos.insert(id);
                                    },
                                }
                                if photo.display_primary {
                                    span {
                                        class: "badge badge-primary badge-sm absolute top-1 left-1",
                                        "Primary"
                                    }
                                }
                                p { class: "text-xs opacity-70 max-w-40 truncate",
                                    "{caption}"
                                }
                            }
                        }
                    )
                })}
            }
        }
    )
}

#[component]
fn DiscoverySection(discoveries: Vec<DiscoveryDto>) -> Element {
    if discoveries.is_empty() {
        return rsx!(
            div {
                h3 { class: "font-semibold", "Discoveries" }
                p { class: "text-sm opacity-70",
                    "No recorded discoveries."
                }
            }
        );
    }

    rsx!(
        div {
            h3 { class: "font-semibold mb-2", "Discoveries" }
            ul { class: "flex flex-col gap-2",
                {discoveries.iter().map(|discovery| {
                    let discoverers = if discovery.discoverers.is_empty() {
                        "Unknown".to_string()
                    } else {
                        discovery
                            .discoverers
                            .iter()
                            .map(|d| d.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    };

                    rsx!(
                        li {
                            key: "{discovery.id}",
                            div { class: "bg-base-100 rounded p-2",
                                p { class: "text-sm",
                                    "{format_date(discovery.discovery_date)} · {format_text(discovery.discovery_method.as_deref())}"
                                }
                                p { class: "text-sm opacity-70",
                                    "By: {discoverers}"
                                }
                                if let Some(notes) = discovery.notes.as_ref() {
                                    p { class: "text-xs opacity-70",
                                        "{notes}"
                                    }
                                }
                            }
                        }
                    )
                })}
            }
        }
    )
}

#[component]
fn ObservationSection(observations: Vec<ObservationDto>) -> Element {
    if observations.is_empty() {
        return rsx!(
            div {
                h3 { class: "font-semibold", "Observations" }
                p { class: "text-sm opacity-70",
                    "No recorded observations."
                }
            }
        );
    }

    rsx!(
        div {
            h3 { class: "font-semibold mb-2", "Observations" }
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-sm",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Observatory" }
                            th { "Instrument" }
                            th { "Wavelength" }
                            th { "Exposure (s)" }
                        }
                    }
                    tbody {
                        {observations.iter().map(|observation| rsx!(
                            tr {
                                key: "{observation.id}",
                                td { "{format_datetime(observation.observation_date)}" }
                                td {
                                    p { "{observation.observatory_name}" }
                                    p { class: "text-xs opacity-70",
                                        "{format_text(observation.location.as_deref())}"
                                    }
                                }
                                td { "{format_text(observation.instrument.as_deref())}" }
                                td { "{format_text(observation.wavelength.as_deref())}" }
                                td { "{format_number(observation.exposure_time)}" }
                            }
                        ))}
                    }
                }
            }
        }
    )
}

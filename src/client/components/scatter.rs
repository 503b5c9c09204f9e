use dioxus::prelude::*;

use crate::client::chart::{build_scene, Marker, CHART_HEIGHT, CHART_WIDTH};
use crate::client::store::catalog::CatalogState;

const AXIS_COLOR: &str = "#475569";
const TICK_LABEL_COLOR: &str = "#94a3b8";
const TOOLTIP_WIDTH: f64 = 190.0;

fn select(state: Signal<CatalogState>, id: i32) {
    #[cfg(feature = "web")]
    spawn(async move {
        crate::client::store::catalog::select_object(state, Some(id)).await;
    });
    #[cfg(not(feature = "web"))]
    let _ = (state, id);
}

#[component]
pub fn ScatterChart() -> Element {
    let state = use_context::<Signal<CatalogState>>();
    let mut hovered = use_signal(|| Option::<Marker>::None);

    let scene = {
        let current = state.read();
        build_scene(&current.objects, current.selected_id, CHART_WIDTH, CHART_HEIGHT)
    };

    if scene.markers.is_empty() {
        return rsx!(
            div {
                class: "card bg-base-200 shadow",
                div {
                    class: "card-body items-center justify-center min-h-64",
                    p { class: "opacity-70",
                        "No objects to plot."
                    }
                }
            }
        );
    }

    let x_axis_y = scene.plot_bottom;
    let x_label_y = scene.height - 20.0;
    let y_label_x = 20.0;
    let plot_center_x = (scene.plot_left + scene.plot_right) / 2.0;
    let plot_center_y = (scene.plot_top + scene.plot_bottom) / 2.0;

    rsx!(
        div {
            class: "card bg-base-200 shadow relative overflow-x-auto",
            svg {
                view_box: "0 0 {scene.width} {scene.height}",
                width: "{scene.width}",
                height: "{scene.height}",

                // Axis lines
                line {
                    x1: "{scene.plot_left}",
                    y1: "{x_axis_y}",
                    x2: "{scene.plot_right}",
                    y2: "{x_axis_y}",
                    stroke: AXIS_COLOR,
                }
                line {
                    x1: "{scene.plot_left}",
                    y1: "{scene.plot_top}",
                    x2: "{scene.plot_left}",
                    y2: "{scene.plot_bottom}",
                    stroke: AXIS_COLOR,
                }

                {scene.x_ticks.iter().map(|tick| {
                    let tick_top = x_axis_y;
                    let tick_bottom = x_axis_y + 6.0;
                    let label_y = x_axis_y + 20.0;

                    rsx!(
                        g {
                            line {
                                x1: "{tick.position}",
                                y1: "{tick_top}",
                                x2: "{tick.position}",
                                y2: "{tick_bottom}",
                                stroke: AXIS_COLOR,
                            }
                            text {
                                x: "{tick.position}",
                                y: "{label_y}",
                                text_anchor: "middle",
                                fill: TICK_LABEL_COLOR,
                                font_size: "11",
                                "{tick.label}"
                            }
                        }
                    )
                })}

                {scene.y_ticks.iter().map(|tick| {
                    let tick_left = scene.plot_left - 6.0;
                    let label_x = scene.plot_left - 10.0;

                    rsx!(
                        g {
                            line {
                                x1: "{tick_left}",
                                y1: "{tick.position}",
                                x2: "{scene.plot_left}",
                                y2: "{tick.position}",
                                stroke: AXIS_COLOR,
                            }
                            text {
                                x: "{label_x}",
                                y: "{tick.position}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                fill: TICK_LABEL_COLOR,
                                font_size: "11",
                                "{tick.label}"
                            }
                        }
                    )
                })}

                text {
                    x: "{plot_center_x}",
                    y: "{x_label_y}",
                    text_anchor: "middle",
                    fill: TICK_LABEL_COLOR,
                    font_size: "13",
                    "Distance (light years, log scale)"
                }
                text {
                    x: "{y_label_x}",
                    y: "{plot_center_y}",
                    text_anchor: "middle",
                    fill: TICK_LABEL_COLOR,
                    font_size: "13",
                    transform: "rotate(-90 {y_label_x} {plot_center_y})",
                    "Apparent magnitude (brighter up)"
                }

                {scene.markers.iter().map(|marker| {
                    let id = marker.object_id;
                    let stroke = if marker.selected { "#ffffff" } else { "none" };
                    let stroke_width = if marker.selected { "3" } else { "0" };
                    let hover_marker = marker.clone();

                    rsx!(
                        circle {
                            key: "{id}",
                            cx: "{marker.x}",
                            cy: "{marker.y}",
                            r: "{marker.radius}",
                            fill: "{marker.color}",
                            fill_opacity: "0.75",
                            stroke: "{stroke}",
                            stroke_width: "{stroke_width}",
                            class: "cursor-pointer",
                            onclick: move |_| select(state, id),
                            onmouseenter: move |_| hovered.set(Some(hover_marker.clone())),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    )
                })}
            }

            if let Some(marker) = hovered.read().as_ref() {
                ChartTooltip { marker: marker.clone(), width: scene.width, height: scene.height }
            }

            div { class: "flex gap-4 px-4 pb-2 text-xs opacity-70",
                LegendEntry { color: "#64ffda", label: "Star" }
                LegendEntry { color: "#5d9eff", label: "Planet" }
                LegendEntry { color: "#f9abff", label: "Galaxy" }
            }
        }
    )
}

/// Floating detail box near the hovered marker, clamped to the chart bounds
#[component]
fn ChartTooltip(marker: Marker, width: f64, height: f64) -> Element {
    let left = (marker.x + 12.0).clamp(0.0, width - TOOLTIP_WIDTH);
    let top = (marker.y - 60.0).clamp(0.0, height - 90.0);

    rsx!(
        div {
            class: "absolute bg-base-100 rounded shadow p-2 text-xs pointer-events-none z-10",
            style: "left: {left}px; top: {top}px; width: {TOOLTIP_WIDTH}px;",
            p { class: "font-semibold",
                "{marker.name}"
            }
            p { "Type: {marker.type_label}" }
            p { "Distance: {marker.distance_label}" }
            p { "Habitable: {marker.habitable_label}" }
        }
    )
}

#[component]
fn LegendEntry(color: &'static str, label: &'static str) -> Element {
    rsx!(
        div { class: "flex items-center gap-1",
            span {
                class: "inline-block w-3 h-3 rounded-full",
                style: "background-color: {color};",
            }
            span { "{label}" }
        }
    )
}

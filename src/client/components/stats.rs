use dioxus::prelude::*;

use crate::client::store::reference::ReferenceState;

#[component]
pub fn StatsCards() -> Element {
    let reference = use_context::<Signal<ReferenceState>>();

    let stats = reference.read().stats;

    rsx!(
        div {
            class: "stats stats-vertical sm:stats-horizontal shadow w-full overflow-x-auto",
            if let Some(stats) = stats {
                StatCard { title: "Objects", value: stats.total_objects }
                StatCard { title: "Stars", value: stats.total_stars }
                StatCard { title: "Planets", value: stats.total_planets }
                StatCard { title: "Galaxies", value: stats.total_galaxies }
                StatCard { title: "Habitable", value: stats.total_habitable }
                StatCard { title: "Discoverers", value: stats.total_discoverers }
                StatCard { title: "Observatories", value: stats.total_observatories }
            } else {
                div { class: "stat",
                    div {
                        class: "skeleton h-16 w-full"
                    }
                }
            }
        }
    )
}

#[component]
fn StatCard(title: &'static str, value: u64) -> Element {
    rsx!(
        div { class: "stat",
            div { class: "stat-title",
                "{title}"
            }
            div { class: "stat-value text-2xl",
                "{value}"
            }
        }
    )
}

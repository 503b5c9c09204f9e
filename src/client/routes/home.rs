use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{
    DetailPanel, DiscovererTable, FilterBar, ObjectList, ObservatoryTable, Page, ScatterChart,
    StatsCards,
};

#[component]
pub fn Home() -> Element {
    // Initial load: object list and reference data in parallel
    #[cfg(feature = "web")]
    {
        use crate::client::store::{
            catalog::{self, CatalogState},
            reference::{self, ReferenceState},
        };

        let catalog_state = use_context::<Signal<CatalogState>>();
        let reference_state = use_context::<Signal<ReferenceState>>();

        use_future(move || async move {
            futures::join!(
                catalog::load_objects(catalog_state),
                reference::load_reference(reference_state),
            );
        });
    }

    rsx!(
        Title { "Interstellar Observatory" }
        Meta {
            name: "description",
            content: "Browse the astronomical catalog: stars, planets, and galaxies with their discoveries, observations, and photos."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                StatsCards { }
                ScatterChart { }
                FilterBar { }
                div { class: "flex flex-col lg:flex-row gap-4 items-start",
                    ObjectList { }
                    DetailPanel { }
                }
                div { class: "grid grid-cols-1 xl:grid-cols-2 gap-4",
                    DiscovererTable { }
                    ObservatoryTable { }
                }
            }
        }
    )
}

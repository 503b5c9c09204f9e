use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaStar
                    }
                    p { class: "text-xl",
                        "Interstellar Observatory"
                    }
                    p { class: "text-xs",
                        "catalog browser"
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button {
                        class: "btn btn-outline btn-sm",
                        "API Docs"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}

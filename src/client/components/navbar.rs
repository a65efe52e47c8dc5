use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::home(),
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Raidcomp"
                        }
                        p { class: "text-xs",
                            "v0.1.0-Alpha.1"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button {
                        class: "btn btn-secondary btn-sm",
                        "API Docs"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}

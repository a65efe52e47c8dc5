use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl", "404" }
                p { "Nothing lives at /{path}" }
                Link {
                    to: Route::home(),
                    class: "btn btn-primary",
                    "Back to roster"
                }
            }
        }
    )
}

use dioxus::prelude::*;

/// Page body below the navbar, with an optional heading row.
///
/// `actions` are rendered beside the heading, e.g. a link back to the roster.
#[component]
pub fn Page(
    class: Option<&'static str>,
    heading: Option<String>,
    actions: Option<Element>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen p-4 {class}",
            if heading.is_some() || actions.is_some() {
                div { class: "flex items-center gap-4",
                    if let Some(heading) = heading {
                        h2 { class: "text-xl", "{heading}" }
                    }
                    {actions}
                }
            }
            {children}
        }
    )
}

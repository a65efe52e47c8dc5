use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use raidcomp::model::{class::ClassSpecTable, player::PlayerEntry};

#[component]
pub fn PlayerCard(
    player: PlayerEntry,
    classes: ClassSpecTable,
    on_delete: Option<EventHandler<String>>,
) -> Element {
    let colour = classes
        .class(&player.class)
        .map(|c| c.colour.clone())
        .unwrap_or_else(|| "inherit".to_string());
    let icon = classes
        .spec(&player.class, player.spec.id)
        .map(|spec| spec.icon_url());
    let status_class = player
        .status
        .and_then(|status| status.colour())
        .map(|colour| colour.css_class())
        .unwrap_or("");
    let realm_class = if player.is_cross_realm() {
        "cross-realm"
    } else {
        ""
    };
    let name = player.name.clone();

    rsx!(
        div { class: "player flex items-center gap-2 {status_class} {realm_class}",
            if let Some(icon) = icon {
                div { class: "spec",
                    img { class: "w-6 h-6", src: "{icon}" }
                }
            }
            div { class: "name flex-1", style: "color: {colour}",
                "{player.name}"
                if let Some(ilvl) = player.spec.ilvl {
                    span { class: "text-xs opacity-60 ml-1", "{ilvl}" }
                }
            }
            if let Some(on_delete) = on_delete {
                button {
                    class: "delete btn btn-ghost btn-xs",
                    onclick: move |_| on_delete.call(name.clone()),
                    Icon {
                        width: 12,
                        height: 12,
                        icon: FaXmark
                    }
                }
            }
        }
    )
}

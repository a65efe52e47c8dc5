use std::collections::HashMap;

use dioxus::prelude::*;

use raidcomp::model::{
    class::ClassSpecTable,
    player::PlayerEntry,
    roster::{RoleBuckets, RoleSummary},
};

use crate::client::components::PlayerCard;

#[component]
pub fn RoleColumn(
    title: String,
    class: String,
    players: Vec<PlayerEntry>,
    classes: ClassSpecTable,
    on_delete: Option<EventHandler<String>>,
) -> Element {
    rsx!(
        div { class: "{class} flex flex-col gap-1 min-w-48",
            h3 { class: "font-bold", "{title}: {players.len()}" }
            for (key, player) in player_keys(&players).into_iter().zip(players.iter()) {
                PlayerCard {
                    key: "{key}",
                    player: player.clone(),
                    classes: classes.clone(),
                    on_delete: on_delete,
                }
            }
        }
    )
}

/// Diffing keys for a column.
///
/// Names may repeat on a roster, so the n-th occurrence of a name gets the suffix `#n`.
/// Keys stay with their player when someone else in the column is removed.
fn player_keys(players: &[PlayerEntry]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    players
        .iter()
        .map(|player| {
            let name = player.name.to_lowercase();
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;

            if *count == 1 {
                name
            } else {
                format!("{}#{}", name, count)
            }
        })
        .collect()
}

/// The four role columns with the total and dps counts above them
#[component]
pub fn RoleColumns(
    roles: RoleBuckets,
    summary: RoleSummary,
    classes: ClassSpecTable,
    on_delete: Option<EventHandler<String>>,
) -> Element {
    rsx!(
        div { class: "flex flex-col gap-2",
            div { class: "flex gap-4",
                h3 { class: "total text-lg", "Total: {summary.total}" }
                h3 { class: "dps text-lg", "DPS: {summary.dps}" }
            }
            div { class: "flex flex-wrap gap-4",
                RoleColumn {
                    title: "Tanks",
                    class: "tanks",
                    players: roles.tanks,
                    classes: classes.clone(),
                    on_delete: on_delete,
                }
                RoleColumn {
                    title: "Healers",
                    class: "healers",
                    players: roles.healers,
                    classes: classes.clone(),
                    on_delete: on_delete,
                }
                RoleColumn {
                    title: "Ranged",
                    class: "ranged",
                    players: roles.ranged_dps,
                    classes: classes.clone(),
                    on_delete: on_delete,
                }
                RoleColumn {
                    title: "Melee",
                    class: "melee",
                    players: roles.melee_dps,
                    classes: classes.clone(),
                    on_delete: on_delete,
                }
            }
        }
    )
}

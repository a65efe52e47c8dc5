use dioxus::document::Title;
use dioxus::prelude::*;

use raidcomp::model::roster::{classify, RosterSort};

use crate::client::{
    components::{Page, RoleColumns},
    router::Route,
    util::api,
};

/// Read-only view of a saved build
#[component]
pub fn Build(hash: String) -> Element {
    let classes = use_resource(api::get_classes);
    let build = use_resource(use_reactive!(|(hash)| api::get_build_roster(hash)));

    let content = match (&*classes.read(), &*build.read()) {
        (Some(Ok(classes)), Some(Ok(Some(players)))) => {
            let classification = classify(players, classes, RosterSort::Insertion);
            let summary = classification.buckets.summary();

            rsx!(RoleColumns {
                roles: classification.buckets,
                summary: summary,
                classes: classes.clone(),
            })
        }
        (Some(Ok(_)), Some(Ok(None))) => rsx!(
            p { "No build is saved under {hash}" }
        ),
        (Some(Err(err)), _) | (_, Some(Err(err))) => rsx!(
            p { class: "text-error", "{err}" }
        ),
        _ => rsx!(
            span { class: "loading loading-spinner loading-md" }
        ),
    };

    rsx!(
        Title { "Raidcomp build {hash}" }
        Page {
            class: "flex flex-col gap-4",
            heading: "Build {hash}",
            actions: rsx!(
                Link {
                    to: Route::home(),
                    class: "btn btn-outline btn-sm",
                    "Back to roster"
                }
            ),
            {content}
        }
    )
}

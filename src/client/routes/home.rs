use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use raidcomp::model::player::PlayerEntry;

use crate::client::{
    components::{AddPlayerForm, Page, RoleColumns},
    router::{Route, ShareQuery},
    util::api,
};

#[component]
pub fn Home(query: ShareQuery) -> Element {
    let navigator = use_navigator();

    // `/?build=<hash>` is the old share link form
    use_effect(use_reactive!(|(query)| {
        if let Some(hash) = query.build {
            navigator.replace(Route::Build { hash });
        }
    }));

    let mut sort_by_ilvl = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut import_text = use_signal(String::new);
    let mut export_text = use_signal(|| None::<String>);
    let mut confirm_reset = use_signal(|| false);

    let classes = use_resource(api::get_classes);
    let mut roster = use_resource(move || api::get_roster_roles(sort_by_ilvl()));

    let on_add = move |entry: PlayerEntry| {
        spawn(async move {
            match api::add_player(entry).await {
                Ok(_) => roster.restart(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let on_delete = move |name: String| {
        spawn(async move {
            match api::delete_player(name).await {
                Ok(_) => roster.restart(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let on_import = move |_| {
        let text = import_text();
        spawn(async move {
            match api::import_roster(text).await {
                Ok(_) => {
                    import_text.set(String::new());
                    export_text.set(None);
                    roster.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let on_export = move |_| {
        spawn(async move {
            match api::export_roster(false).await {
                Ok(text) => export_text.set(Some(text)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let on_reset = move |_| {
        confirm_reset.set(false);
        spawn(async move {
            match api::reset_roster().await {
                Ok(()) => {
                    export_text.set(None);
                    roster.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let on_save = move |_| {
        spawn(async move {
            let export = match api::export_roster(true).await {
                Ok(export) => export,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            if export.trim().is_empty() {
                error.set(Some("The roster is empty, add players before saving".to_string()));
                return;
            }

            match api::save_build(export).await {
                Ok(saved) => {
                    navigator.push(Route::Build { hash: saved.hash });
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx!(
        Title { "Raidcomp" }
        Meta {
            name: "description",
            content: "Raid roster planner, players grouped by role."
        }
        Page { class: "flex flex-col gap-4", heading: "Roster",
            if let Some(message) = error() {
                div { class: "alert alert-error",
                    p { "{message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| error.set(None),
                        "Dismiss"
                    }
                }
            }
            match (&*classes.read(), &*roster.read()) {
                (Some(Ok(classes)), Some(Ok(classified))) => rsx!(
                    AddPlayerForm {
                        classes: classes.clone(),
                        on_add: on_add,
                    }
                    div { class: "flex flex-wrap gap-2 items-center",
                        label { class: "label cursor-pointer gap-2",
                            input {
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: sort_by_ilvl(),
                                onchange: move |e| sort_by_ilvl.set(e.checked()),
                            }
                            "Sort by item level"
                        }
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: on_save,
                            "Save build"
                        }
                        button {
                            class: "btn btn-outline btn-sm",
                            onclick: on_export,
                            "Export"
                        }
                        if confirm_reset() {
                            button {
                                class: "btn btn-error btn-sm",
                                onclick: on_reset,
                                "Confirm reset"
                            }
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| confirm_reset.set(false),
                                "Cancel"
                            }
                        } else {
                            button {
                                class: "btn btn-outline btn-error btn-sm",
                                disabled: classified.summary.total == 0 && classified.skipped.is_empty(),
                                onclick: move |_| confirm_reset.set(true),
                                "Reset roster"
                            }
                        }
                    }
                    RoleColumns {
                        roles: classified.roles.clone(),
                        summary: classified.summary,
                        classes: classes.clone(),
                        on_delete: on_delete,
                    }
                    if !classified.skipped.is_empty() {
                        div { class: "text-sm opacity-70",
                            p { "Not shown:" }
                            ul { class: "list-disc pl-6",
                                for skipped in classified.skipped.iter() {
                                    li { key: "{skipped.index}",
                                        "{skipped.entry.name} ({skipped.entry.class} {skipped.entry.spec.id})"
                                    }
                                }
                            }
                        }
                    }
                ),
                (Some(Err(err)), _) | (_, Some(Err(err))) => rsx!(
                    p { class: "text-error", "{err}" }
                ),
                _ => rsx!(
                    span { class: "loading loading-spinner loading-md" }
                ),
            }
            if let Some(text) = export_text() {
                div { class: "flex flex-col gap-2 max-w-128",
                    textarea {
                        class: "textarea h-32 font-mono",
                        readonly: true,
                        value: "{text}",
                    }
                    button {
                        class: "btn btn-ghost btn-sm w-32",
                        onclick: move |_| export_text.set(None),
                        "Close export"
                    }
                }
            }
            div { class: "flex flex-col gap-2 max-w-128",
                textarea {
                    class: "textarea h-32 font-mono",
                    placeholder: "Name;class;spec[;status], one player per line",
                    value: "{import_text}",
                    oninput: move |e| import_text.set(e.value()),
                }
                button {
                    class: "btn btn-outline btn-sm w-32",
                    disabled: import_text().trim().is_empty(),
                    onclick: on_import,
                    "Import"
                }
            }
        }
    )
}

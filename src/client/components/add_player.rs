use dioxus::prelude::*;

use raidcomp::model::{
    class::ClassSpecTable,
    player::{InviteStatus, PlayerEntry},
};

const STATUS_OPTIONS: [(InviteStatus, &str); 4] = [
    (InviteStatus::ACCEPTED, "Accepted"),
    (InviteStatus::TENTATIVE, "Tentative"),
    (InviteStatus::INVITED, "Invited"),
    (InviteStatus::DECLINED, "Declined"),
];

/// Form for a new player; `on_add` receives the entry once every field is filled in
#[component]
pub fn AddPlayerForm(classes: ClassSpecTable, on_add: EventHandler<PlayerEntry>) -> Element {
    let mut name = use_signal(String::new);
    let mut class = use_signal(String::new);
    let mut spec = use_signal(String::new);
    let mut status = use_signal(|| InviteStatus::ACCEPTED.to_string());
    let mut ilvl = use_signal(String::new);

    let specs: Vec<(usize, String)> = classes
        .class(&class())
        .map(|c| {
            c.specs
                .iter()
                .enumerate()
                .map(|(id, spec)| (id, spec.name.clone()))
                .collect()
        })
        .unwrap_or_default();

    let mut submit = move || {
        let Ok(spec_id) = spec().parse::<usize>() else {
            return;
        };
        let Ok(status_code) = status().parse::<u8>() else {
            return;
        };
        if name().trim().is_empty() || class().is_empty() {
            return;
        }

        let mut entry = PlayerEntry::new(name().trim(), class(), spec_id)
            .with_status(InviteStatus::new(status_code));
        if let Ok(level) = ilvl().trim().parse::<u32>() {
            entry = entry.with_ilvl(level);
        }

        on_add.call(entry);

        name.set(String::new());
        class.set(String::new());
        spec.set(String::new());
        status.set(InviteStatus::ACCEPTED.to_string());
        ilvl.set(String::new());
    };

    rsx!(
        div { class: "flex flex-wrap gap-2 items-end",
            input {
                class: "input input-sm",
                placeholder: "Name",
                value: "{name}",
                oninput: move |e| name.set(e.value()),
                onkeyup: move |e| {
                    if e.key() == Key::Enter {
                        submit();
                    }
                },
            }
            select {
                class: "select select-sm",
                value: "{class}",
                onchange: move |e| {
                    class.set(e.value());
                    spec.set(String::new());
                },
                option { value: "", disabled: true, "Class" }
                for (key, info) in classes.iter() {
                    option { key: "{key}", value: "{key}", "{info.name}" }
                }
            }
            select {
                class: "select select-sm",
                value: "{spec}",
                onchange: move |e| spec.set(e.value()),
                option { value: "", disabled: true, "Spec" }
                for (id, spec_name) in specs {
                    option { key: "{id}", value: "{id}", "{spec_name}" }
                }
            }
            select {
                class: "select select-sm",
                value: "{status}",
                onchange: move |e| status.set(e.value()),
                for (code, label) in STATUS_OPTIONS {
                    option { key: "{code}", value: "{code}", "{label}" }
                }
            }
            input {
                class: "input input-sm w-24",
                placeholder: "Item level",
                value: "{ilvl}",
                oninput: move |e| ilvl.set(e.value()),
                onkeyup: move |e| {
                    if e.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| submit(),
                "Add"
            }
        }
    )
}

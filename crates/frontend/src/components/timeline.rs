use dioxus::prelude::*;
use loudi_shared::models::{Camera, Era};

/// Era timeline buttons plus the info panel for the selected era.
#[component]
pub fn Timeline(
    eras: Vec<Era>,
    current: usize,
    on_select: EventHandler<usize>,
    on_group_focus: EventHandler<Camera>,
) -> Element {
    let selected = eras.get(current).cloned();

    rsx! {
        div { class: "timeline",
            div { class: "t-btns",
                for (i, era) in eras.iter().enumerate() {
                    button {
                        key: "{i}",
                        class: if i == current { "t-btn active" } else { "t-btn" },
                        title: "{era.year}",
                        onclick: move |_| on_select.call(i),
                        "{era.title}"
                    }
                }
            }
            if let Some(era) = selected {
                div { class: "era-panel",
                    div { class: "era-title", "{era.title}" }
                    div { class: "era-year", "{era.year}" }
                    div { class: "era-desc", dangerous_inner_html: "{era.desc}" }
                    div { class: "era-groups",
                        for g in era.groups.iter() {
                            button {
                                key: "{g.name}",
                                class: "era-group-chip",
                                style: "border-color: {g.color}; color: {g.color};",
                                onclick: {
                                    let center = g.center;
                                    let zoom = g.zoom;
                                    move |_| on_group_focus.call(Camera { center, zoom })
                                },
                                "{g.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}

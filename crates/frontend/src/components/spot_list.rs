use dioxus::prelude::*;

/// One sidebar card for a visible spot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotCard {
    /// Index into the current visible list, echoed back on click.
    pub spot_index: usize,
    pub name: String,
    pub area: String,
    pub desc: String,
    pub icon: String,
    pub color: String,
}

#[component]
pub fn SpotList(cards: Vec<SpotCard>, on_open: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "spot-list",
            // An empty result is a distinct state, never a silent blank.
            if cards.is_empty() {
                div { class: "empty-state", "没有符合条件的景点，换个筛选或关键词试试。" }
            }
            for card in cards {
                div {
                    key: "{card.spot_index}",
                    class: "spot-card",
                    onclick: {
                        let idx = card.spot_index;
                        move |_| on_open.call(idx)
                    },
                    div { class: "card-icon", style: "color: {card.color};", "{card.icon}" }
                    div { class: "card-info",
                        div { class: "card-title",
                            span { "{card.name}" }
                            span { class: "card-area", style: "color: {card.color};", "{card.area}" }
                        }
                        div { class: "card-desc", "{card.desc}" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use loudi_shared::filter::CategoryFilter;
use loudi_shared::regions;

/// Sidebar category buttons: the all-filter, the two fixed tags, and one
/// area button per sub-region.
#[component]
pub fn TagFilter(current: CategoryFilter, on_select: EventHandler<CategoryFilter>) -> Element {
    let mut buttons: Vec<(String, CategoryFilter)> = vec![
        ("全部".to_string(), CategoryFilter::All),
        ("高校".to_string(), CategoryFilter::Tag("高校".to_string())),
        ("学府".to_string(), CategoryFilter::Tag("学府".to_string())),
    ];
    for region in &regions::LOUDI_SUBREGIONS {
        buttons.push((
            region.label.to_string(),
            CategoryFilter::Area(region.keyword.to_string()),
        ));
    }
    let buttons: Vec<(String, CategoryFilter, bool)> = buttons
        .into_iter()
        .map(|(label, filter)| {
            let active = filter == current;
            (label, filter, active)
        })
        .collect();

    rsx! {
        div { class: "tag-row",
            for (label, filter, active) in buttons {
                button {
                    key: "{label}",
                    class: if active { "tag-btn active" } else { "tag-btn" },
                    onclick: move |_| on_select.call(filter.clone()),
                    "{label}"
                }
            }
        }
    }
}

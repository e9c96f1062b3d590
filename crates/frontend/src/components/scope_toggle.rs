use dioxus::prelude::*;
use loudi_shared::state::Scope;

/// Local/parent scope switch. Only rendered in variants with the scope
/// toggle configured.
#[component]
pub fn ScopeToggle(scope: Scope, on_toggle: EventHandler<()>) -> Element {
    let label = match scope {
        Scope::Local => "查看全省",
        Scope::Parent => "返回娄底",
    };
    rsx! {
        button {
            class: "scope-btn",
            onclick: move |_| on_toggle.call(()),
            "{label}"
        }
    }
}

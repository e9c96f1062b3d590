use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const DEBOUNCE_MS: u32 = 250;

/// Free-text search input. Keystrokes are debounced so the filter engine
/// re-runs once per pause, not once per character.
#[component]
pub fn SearchBox(on_search: EventHandler<String>) -> Element {
    let mut generation = use_signal(|| 0u64);

    rsx! {
        div { class: "search-row",
            input {
                r#type: "search",
                placeholder: "搜索景点名称、简介…",
                oninput: move |evt: Event<FormData>| {
                    let term = evt.value();
                    let my_generation = *generation.peek() + 1;
                    generation.set(my_generation);
                    spawn(async move {
                        TimeoutFuture::new(DEBOUNCE_MS).await;
                        // A newer keystroke supersedes this one.
                        if *generation.peek() == my_generation {
                            on_search.call(term);
                        }
                    });
                },
            }
        }
    }
}

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use loudi_shared::boundary::BoundarySet;
use loudi_shared::camera;
use loudi_shared::era;
use loudi_shared::filter::{self, CategoryFilter};
use loudi_shared::models::{Camera, PolygonStyle, Spot};
use loudi_shared::regions;
use loudi_shared::state::{AtlasConfig, CameraMove, Mode, Scope, Transition, ViewState};

use crate::api;
use crate::components::map_view::{MapView, MarkerRender, PolygonRender, PopupRender};
use crate::components::scope_toggle::ScopeToggle;
use crate::components::search_box::SearchBox;
use crate::components::spot_list::{SpotCard, SpotList};
use crate::components::tag_filter::TagFilter;
use crate::components::timeline::Timeline;
use crate::coords;
use crate::data;

/// Feature set of this deployment. Other variants flip these switches.
const CONFIG: AtlasConfig = AtlasConfig {
    scope_toggle: true,
    search: true,
    auto_fit: false,
};

/// Surface a user-visible notice. Failures are reported here once and never
/// escalate into the render layer.
fn notify(message: &str) {
    warn!(message, "user notice");
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// External navigation link for a spot popup.
fn nav_url(spot: &Spot) -> String {
    format!(
        "https://uri.amap.com/marker?position={},{}&name={}",
        spot.lng, spot.lat, spot.name
    )
}

#[component]
pub fn Atlas() -> Element {
    let spots = use_signal(data::spots);
    let eras = use_signal(data::eras);

    let mut view = use_signal(ViewState::new);
    let mut cam = use_signal(camera::default_camera);
    let mut open_spot = use_signal(|| None::<Spot>);

    // The two boundary loads race; each view below degrades to an inert map
    // until its dataset is in.
    let local_boundary = use_resource(|| async move { api::fetch_local_boundary().await });
    let parent_boundary = use_resource(|| async move {
        if CONFIG.scope_toggle {
            Some(api::fetch_parent_boundary().await)
        } else {
            None
        }
    });

    // Each failed load is terminal for its dataset and reported exactly once.
    let mut local_error_reported = use_signal(|| false);
    use_effect(move || {
        if let Some(Err(e)) = &*local_boundary.read() {
            if !*local_error_reported.peek() {
                local_error_reported.set(true);
                notify(&format!("无法加载娄底边界数据：{e}"));
            }
        }
    });
    let mut parent_error_reported = use_signal(|| false);
    use_effect(move || {
        if let Some(Some(Err(e))) = &*parent_boundary.read() {
            if !*parent_error_reported.peek() {
                parent_error_reported.set(true);
                notify(&format!("无法加载湖南省边界数据：{e}"));
            }
        }
    });

    // Single funnel for state transitions: directives first, then the new
    // state value replaces the old one.
    let apply = use_callback(move |t: Transition| {
        if let Some(notice) = &t.notice {
            notify(notice);
        }
        match t.camera {
            Some(CameraMove::Jump(c)) => cam.set(c),
            Some(CameraMove::FitVisible) => {
                let all = spots.peek();
                let scope_keywords = regions::scope_keywords();
                let scope = (t.state.scope == Scope::Local).then_some(&scope_keywords[..]);
                let coords: Vec<_> =
                    filter::visible_spots(&all, &t.state.filter, &t.state.search, scope)
                        .iter()
                        .map(|s| s.coord())
                        .collect();
                cam.set(camera::fit_bounds(&coords));
            }
            None => {}
        }
        info!(mode = ?t.state.mode, scope = ?t.state.scope, "view state updated");
        open_spot.set(None);
        view.set(t.state);
    });

    // Fly to a spot and open its popup (card or marker click).
    let open = use_callback(move |spot: Spot| {
        cam.set(camera::spot_camera(spot.coord()));
        open_spot.set(Some(spot));
    });

    let v = view.read().clone();

    let local_set: Option<BoundarySet> = match &*local_boundary.read() {
        Some(Ok(set)) => Some(set.clone()),
        _ => None,
    };
    let parent_set: Option<BoundarySet> = match &*parent_boundary.read() {
        Some(Some(Ok(set))) => Some(set.clone()),
        _ => None,
    };
    let parent_loaded = parent_set.is_some();

    // Visible spots; markers and cards share the same ordered list.
    let scope_keywords = regions::scope_keywords();
    let visible: Vec<Spot> = if v.mode == Mode::Tour && v.scope == Scope::Local {
        let all = spots.read();
        filter::visible_spots(&all, &v.filter, &v.search, Some(&scope_keywords))
            .into_iter()
            .cloned()
            .collect()
    } else {
        // History discards markers; parent scope clears them.
        Vec::new()
    };

    let eras_vec = eras.read().clone();
    let boundary = match v.scope {
        Scope::Local => local_set,
        Scope::Parent => parent_set,
    };
    let polygons: Vec<PolygonRender> = boundary
        .map(|set| {
            set.features
                .iter()
                .enumerate()
                .map(|(i, feature)| {
                    let style = match (v.mode, v.scope) {
                        (Mode::History, _) => eras_vec
                            .get(v.era_index)
                            .map(|e| era::history_style(&feature.name, e))
                            .unwrap_or_else(PolygonStyle::hidden),
                        (Mode::Tour, Scope::Parent) => regions::parent_style(i),
                        (Mode::Tour, Scope::Local) => regions::tour_style(&feature.name),
                    };
                    PolygonRender {
                        name: feature.name.clone(),
                        paths: feature.rings.iter().map(|r| coords::ring_to_path(r)).collect(),
                        style,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let markers: Vec<MarkerRender> = visible
        .iter()
        .enumerate()
        .map(|(i, s)| MarkerRender {
            spot_index: i,
            name: s.name.clone(),
            coord: s.coord(),
            color: regions::spot_color(&s.area).to_string(),
        })
        .collect();

    let cards: Vec<SpotCard> = visible
        .iter()
        .enumerate()
        .map(|(i, s)| SpotCard {
            spot_index: i,
            name: s.name.clone(),
            area: s.area.clone(),
            desc: s.desc.clone(),
            icon: s.icon.clone(),
            color: regions::spot_color(&s.area).to_string(),
        })
        .collect();

    let popup: Option<PopupRender> = open_spot.read().as_ref().map(|s| PopupRender {
        name: s.name.clone(),
        desc: s.desc.clone(),
        color: regions::spot_color(&s.area).to_string(),
        coord: s.coord(),
        nav_url: nav_url(s),
    });

    let visible_for_marker = visible.clone();
    let visible_for_card = visible;

    rsx! {
        div { class: "app",
            header { class: "header",
                h1 { "娄底文旅·历史地图" }
                div { class: "tabs",
                    button {
                        class: if v.mode == Mode::Tour { "tab active" } else { "tab" },
                        onclick: move |_| {
                            let t = view.peek().set_mode(Mode::Tour, &eras.peek(), &CONFIG);
                            apply.call(t);
                        },
                        "文旅导览"
                    }
                    button {
                        class: if v.mode == Mode::History { "tab active" } else { "tab" },
                        onclick: move |_| {
                            let t = view.peek().set_mode(Mode::History, &eras.peek(), &CONFIG);
                            apply.call(t);
                        },
                        "历史疆域"
                    }
                }
                if CONFIG.scope_toggle && v.mode == Mode::Tour {
                    ScopeToggle {
                        scope: v.scope,
                        on_toggle: move |_| {
                            let t = view.peek().toggle_scope(parent_loaded, &CONFIG);
                            apply.call(t);
                        },
                    }
                }
            }

            div { class: "sidebar",
                if v.mode == Mode::Tour && v.scope == Scope::Local {
                    TagFilter {
                        current: v.filter.clone(),
                        on_select: move |f: CategoryFilter| {
                            let t = view.peek().set_filter(f, &CONFIG);
                            apply.call(t);
                        },
                    }
                    if CONFIG.search {
                        SearchBox {
                            on_search: move |term: String| {
                                let t = view.peek().set_search(term, &CONFIG);
                                apply.call(t);
                            },
                        }
                    }
                    SpotList {
                        cards,
                        on_open: move |i: usize| {
                            if let Some(s) = visible_for_card.get(i) {
                                open.call(s.clone());
                            }
                        },
                    }
                }
                if v.mode == Mode::Tour && v.scope == Scope::Parent {
                    div { class: "scope-hint", "点击娄底市辖域可返回细览，其余市州仅作参照。" }
                }
                if v.mode == Mode::History {
                    Timeline {
                        eras: eras_vec.clone(),
                        current: v.era_index,
                        on_select: move |i: usize| {
                            let t = view.peek().set_era(i, &eras.peek());
                            apply.call(t);
                        },
                        on_group_focus: move |c: Camera| cam.set(c),
                    }
                }
            }

            MapView {
                polygons,
                markers,
                camera: cam,
                popup,
                on_polygon_click: move |name: String| {
                    let t = view.peek().drill_down(&name);
                    apply.call(t);
                },
                on_marker_click: move |i: usize| {
                    if let Some(s) = visible_for_marker.get(i) {
                        open.call(s.clone());
                    }
                },
                on_popup_close: move |_| open_spot.set(None),
            }
        }
    }
}

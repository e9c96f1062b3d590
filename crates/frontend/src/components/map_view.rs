use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use loudi_shared::models::{Camera, LatLng, PolygonStyle};

use crate::coords;

const MAP_CONTAINER_ID: &str = "atlas-map-container";

/// Drag threshold in pixels — movement below this is treated as a click.
const DRAG_THRESHOLD: f64 = 3.0;

const ZOOM_MIN: f64 = 6.0;
const ZOOM_MAX: f64 = 16.0;
const ZOOM_STEP: f64 = 1.1;

/// Fallback container dimensions before the DOM is measurable.
const REFERENCE_W: f64 = 960.0;
const REFERENCE_H: f64 = 640.0;

/// One styled boundary polygon ready for the SVG layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRender {
    pub name: String,
    /// One SVG path per outer ring.
    pub paths: Vec<String>,
    pub style: PolygonStyle,
}

/// One spot marker ready for the SVG layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRender {
    pub spot_index: usize,
    pub name: String,
    pub coord: LatLng,
    pub color: String,
}

/// Popup content anchored to a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupRender {
    pub name: String,
    pub desc: String,
    pub color: String,
    pub coord: LatLng,
    pub nav_url: String,
}

/// One `<path>` element, fully resolved for the current scale.
#[derive(Debug, Clone, PartialEq)]
struct PathEl {
    key: String,
    name: String,
    d: String,
    stroke: String,
    stroke_width: f64,
    stroke_opacity: f64,
    fill: String,
    fill_opacity: f64,
}

/// One marker `<circle>` element in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
struct MarkerEl {
    index: usize,
    x: f64,
    y: f64,
    color: String,
}

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Bounding client rect of the map container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

fn container_size() -> (f64, f64) {
    match container_rect() {
        Some(rect) if rect.width() > 0.0 => (rect.width(), rect.height()),
        _ => (REFERENCE_W, REFERENCE_H),
    }
}

// ---------------------------------------------------------------------------
// Zoom math (pure, easily testable)
// ---------------------------------------------------------------------------

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Next zoom level for a wheel movement, clamped to the zoom range.
fn next_zoom(current: f64, delta_y: f64) -> f64 {
    let factor = if delta_y < 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
    (current * factor).clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Canvas length that renders at a constant `screen_px` regardless of zoom.
fn screen_invariant(screen_px: f64, scale: f64) -> f64 {
    screen_px / scale.max(1e-9)
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    polygons: Vec<PolygonRender>,
    markers: Vec<MarkerRender>,
    camera: Signal<Camera>,
    popup: Option<PopupRender>,
    on_polygon_click: EventHandler<String>,
    on_marker_click: EventHandler<usize>,
    on_popup_close: EventHandler<()>,
) -> Element {
    // Drag state
    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut last_x = use_signal(|| 0.0_f64);
    let mut last_y = use_signal(|| 0.0_f64);

    // Name of the polygon under the cursor, shown in the corner readout.
    let mut hovered = use_signal(|| None::<String>);

    let cur_camera = *camera.read();
    let (container_w, container_h) = container_size();
    let (pan_x, pan_y, scale) = coords::camera_transform(&cur_camera, container_w, container_h);

    let transform_style = format!(
        "transform: translate({pan_x}px, {pan_y}px) scale({scale}); transform-origin: 0 0;"
    );
    let container_class = if *is_dragging.read() {
        "map-container dragging"
    } else {
        "map-container"
    };

    let marker_r = screen_invariant(9.0, scale);
    let marker_stroke = screen_invariant(2.0, scale);
    let canvas_w = coords::CANVAS_W;
    let canvas_h = coords::CANVAS_H;
    let view_box = format!("0 0 {canvas_w} {canvas_h}");

    let path_els: Vec<PathEl> = polygons
        .iter()
        .flat_map(|polygon| {
            polygon.paths.iter().enumerate().map(|(ring_idx, d)| PathEl {
                key: format!("{}-{ring_idx}", polygon.name),
                name: polygon.name.clone(),
                d: d.clone(),
                stroke: polygon.style.color.clone(),
                stroke_width: screen_invariant(polygon.style.weight, scale),
                stroke_opacity: polygon.style.opacity,
                fill: polygon.style.fill_color.clone(),
                fill_opacity: polygon.style.fill_opacity,
            })
        })
        .collect();

    let marker_els: Vec<MarkerEl> = markers
        .iter()
        .map(|m| {
            let (x, y) = coords::project(m.coord);
            MarkerEl {
                index: m.spot_index,
                x,
                y,
                color: m.color.clone(),
            }
        })
        .collect();

    // Popup overlay, outside the transform so text renders unscaled.
    let popup_el = popup.as_ref().map(|p| {
        let (px, py) =
            coords::latlng_to_container(&cur_camera, container_w, container_h, p.coord);
        rsx! {
            div {
                class: "popup",
                style: "left: {px}px; top: {py}px;",
                div {
                    class: "pop-head",
                    style: "background: {p.color};",
                    span { "{p.name}" }
                    button {
                        class: "pop-close",
                        onclick: move |_| on_popup_close.call(()),
                        "×"
                    }
                }
                div { class: "pop-body",
                    "{p.desc}"
                    a {
                        class: "pop-link",
                        style: "background: {p.color};",
                        href: "{p.nav_url}",
                        target: "_blank",
                        "🚀 导航去这里"
                    }
                }
            }
        }
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let delta_y = wheel_delta_y(evt.data().delta());
                let old = *camera.read();
                let new_z = next_zoom(old.zoom, delta_y);
                if (new_z - old.zoom).abs() < 1e-9 {
                    return;
                }
                let Some(rect) = container_rect() else { return };
                let client = evt.data().client_coordinates();
                let cx = client.x - rect.left();
                let cy = client.y - rect.top();
                camera.set(coords::zoom_about(&old, rect.width(), rect.height(), cx, cy, new_z));
            },

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                is_dragging.set(true);
                did_drag.set(false);
                last_x.set(client.x);
                last_y.set(client.y);
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !*is_dragging.read() {
                    return;
                }
                let client = evt.client_coordinates();
                let dx = client.x - *last_x.read();
                let dy = client.y - *last_y.read();
                if !*did_drag.read() && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD) {
                    did_drag.set(true);
                }
                if *did_drag.read() {
                    let old = *camera.read();
                    camera.set(coords::pan_by(&old, dx, dy));
                    last_x.set(client.x);
                    last_y.set(client.y);
                }
            },

            onmouseup: move |_| {
                is_dragging.set(false);
            },

            onmouseleave: move |_| {
                is_dragging.set(false);
            },

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                let old = *camera.read();
                let new_z = (old.zoom + 1.0).clamp(ZOOM_MIN, ZOOM_MAX);
                let Some(rect) = container_rect() else { return };
                let client = evt.data().client_coordinates();
                let cx = client.x - rect.left();
                let cy = client.y - rect.top();
                camera.set(coords::zoom_about(&old, rect.width(), rect.height(), cx, cy, new_z));
            },

            div {
                class: "map-inner",
                style: "{transform_style}",

                svg {
                    view_box: "{view_box}",
                    width: "{canvas_w}",
                    height: "{canvas_h}",

                    // Boundary polygons: unclaimed ones stay in the tree with
                    // transparent styling so hover stays consistent.
                    for p in path_els {
                        path {
                            key: "{p.key}",
                            d: "{p.d}",
                            stroke: "{p.stroke}",
                            stroke_width: "{p.stroke_width}",
                            stroke_opacity: "{p.stroke_opacity}",
                            fill: "{p.fill}",
                            fill_opacity: "{p.fill_opacity}",
                            onclick: {
                                let name = p.name.clone();
                                move |_| {
                                    if !*did_drag.read() {
                                        on_polygon_click.call(name.clone());
                                    }
                                }
                            },
                            onmouseenter: {
                                let name = p.name.clone();
                                move |_| hovered.set(Some(name.clone()))
                            },
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }

                    for m in marker_els {
                        circle {
                            key: "{m.index}",
                            cx: "{m.x}",
                            cy: "{m.y}",
                            r: "{marker_r}",
                            fill: "{m.color}",
                            stroke: "white",
                            stroke_width: "{marker_stroke}",
                            class: "spot-marker",
                            onclick: {
                                let idx = m.index;
                                move |_| {
                                    if !*did_drag.read() {
                                        on_marker_click.call(idx);
                                    }
                                }
                            },
                        }
                    }
                }
            }

            {popup_el}

            if let Some(name) = hovered.read().as_ref() {
                div { class: "hover-readout", "{name}" }
            }
        }
    }
}

//! Projection between WGS84 coordinates, the virtual map canvas, and
//! container (screen) pixels.
//!
//! Boundary rings and markers are drawn in a fixed virtual canvas; the
//! camera (center + web-map zoom) becomes a CSS translate/scale on that
//! canvas. Everything here is pure so the math is testable without a DOM.

use loudi_shared::models::{Camera, LatLng};

/// Virtual canvas dimensions in pixels.
pub const CANVAS_W: f64 = 1000.0;
pub const CANVAS_H: f64 = 1000.0;

// Geographic frame of the canvas: the parent province plus margin, so both
// scopes project into the same space.
const FRAME_NORTH: f64 = 30.2;
const FRAME_SOUTH: f64 = 24.6;
const FRAME_WEST: f64 = 108.7;
const FRAME_EAST: f64 = 114.3;

/// Rendered pixels per degree of longitude at web-map zoom level `zoom`
/// (256 px world tile doubling per level).
fn px_per_degree(zoom: f64) -> f64 {
    256.0 * zoom.exp2() / 360.0
}

/// CSS scale factor applied to the canvas for a given zoom.
pub fn canvas_scale(zoom: f64) -> f64 {
    px_per_degree(zoom) * (FRAME_EAST - FRAME_WEST) / CANVAS_W
}

/// Project a coordinate into virtual-canvas pixels (equirectangular).
pub fn project(coord: LatLng) -> (f64, f64) {
    let x = (coord.lng - FRAME_WEST) / (FRAME_EAST - FRAME_WEST) * CANVAS_W;
    let y = (FRAME_NORTH - coord.lat) / (FRAME_NORTH - FRAME_SOUTH) * CANVAS_H;
    (x, y)
}

/// Inverse of `project`.
pub fn unproject(x: f64, y: f64) -> LatLng {
    LatLng::new(
        FRAME_NORTH - y / CANVAS_H * (FRAME_NORTH - FRAME_SOUTH),
        FRAME_WEST + x / CANVAS_W * (FRAME_EAST - FRAME_WEST),
    )
}

/// Translate/scale for the canvas so the camera center lands in the middle
/// of a `container_w` × `container_h` viewport. Returns (pan_x, pan_y, scale).
pub fn camera_transform(camera: &Camera, container_w: f64, container_h: f64) -> (f64, f64, f64) {
    let scale = canvas_scale(camera.zoom);
    let (cx, cy) = project(camera.center);
    (
        container_w / 2.0 - cx * scale,
        container_h / 2.0 - cy * scale,
        scale,
    )
}

/// Container pixel position of a coordinate under the given camera. Used for
/// popup anchoring.
pub fn latlng_to_container(
    camera: &Camera,
    container_w: f64,
    container_h: f64,
    coord: LatLng,
) -> (f64, f64) {
    let (pan_x, pan_y, scale) = camera_transform(camera, container_w, container_h);
    let (x, y) = project(coord);
    (x * scale + pan_x, y * scale + pan_y)
}

/// Coordinate under a container pixel position for the given camera. Used to
/// keep the cursor's point fixed while zooming.
pub fn container_to_latlng(
    camera: &Camera,
    container_w: f64,
    container_h: f64,
    px: f64,
    py: f64,
) -> LatLng {
    let (pan_x, pan_y, scale) = camera_transform(camera, container_w, container_h);
    unproject((px - pan_x) / scale, (py - pan_y) / scale)
}

/// New camera at `new_zoom` keeping the coordinate under the cursor fixed.
pub fn zoom_about(
    camera: &Camera,
    container_w: f64,
    container_h: f64,
    cursor_x: f64,
    cursor_y: f64,
    new_zoom: f64,
) -> Camera {
    let anchor = container_to_latlng(camera, container_w, container_h, cursor_x, cursor_y);
    let (ax, ay) = project(anchor);
    let scale = canvas_scale(new_zoom);
    // Solve for the center whose transform puts the anchor back under the
    // cursor: cursor = anchor_px * scale + pan, pan = half - center_px * scale.
    let center_px_x = ax + (container_w / 2.0 - cursor_x) / scale;
    let center_px_y = ay + (container_h / 2.0 - cursor_y) / scale;
    Camera {
        center: unproject(center_px_x, center_px_y),
        zoom: new_zoom,
    }
}

/// New camera after dragging the content by (dx, dy) container pixels.
pub fn pan_by(camera: &Camera, dx: f64, dy: f64) -> Camera {
    let scale = canvas_scale(camera.zoom);
    let (cx, cy) = project(camera.center);
    Camera {
        center: unproject(cx - dx / scale, cy - dy / scale),
        zoom: camera.zoom,
    }
}

/// SVG path data for one boundary ring in canvas space.
pub fn ring_to_path(ring: &[LatLng]) -> String {
    let mut path = String::with_capacity(ring.len() * 16);
    for (i, coord) in ring.iter().enumerate() {
        let (x, y) = project(*coord);
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{cmd}{x:.2},{y:.2} "));
    }
    if !ring.is_empty() {
        path.push('Z');
    }
    path
}

//! Viewport math: default cameras and fit-to-bounds.

use crate::models::{Camera, LatLng};

/// Default regional view over the local region.
pub const DEFAULT_CENTER: LatLng = LatLng::new(27.7017, 111.9963);
pub const DEFAULT_ZOOM: f64 = 9.0;

/// Zoom applied when flying to a single spot from a card or marker click.
pub const SPOT_ZOOM: f64 = 15.0;

const FIT_MIN_ZOOM: f64 = 4.0;
const FIT_MAX_ZOOM: f64 = 13.0;

pub fn default_camera() -> Camera {
    Camera {
        center: DEFAULT_CENTER,
        zoom: DEFAULT_ZOOM,
    }
}

pub fn spot_camera(center: LatLng) -> Camera {
    Camera {
        center,
        zoom: SPOT_ZOOM,
    }
}

/// Tightest camera containing all coordinates: centered on the bounding box
/// midpoint, zoomed so the wider of the two spans fits. An empty input yields
/// the default regional camera.
pub fn fit_bounds(coords: &[LatLng]) -> Camera {
    let Some(first) = coords.first() else {
        return default_camera();
    };

    let mut min_lat = first.lat;
    let mut max_lat = first.lat;
    let mut min_lng = first.lng;
    let mut max_lng = first.lng;
    for c in &coords[1..] {
        min_lat = min_lat.min(c.lat);
        max_lat = max_lat.max(c.lat);
        min_lng = min_lng.min(c.lng);
        max_lng = max_lng.max(c.lng);
    }

    let center = LatLng::new((min_lat + max_lat) / 2.0, (min_lng + max_lng) / 2.0);

    // Web-map zoom: each level halves the visible span. Spans are floored so
    // a single coordinate clamps to the max fit zoom instead of dividing by
    // zero.
    let lat_span = (max_lat - min_lat).max(1e-6);
    let lng_span = (max_lng - min_lng).max(1e-6);
    let zoom = (360.0 / lng_span)
        .log2()
        .min((180.0 / lat_span).log2())
        .clamp(FIT_MIN_ZOOM, FIT_MAX_ZOOM);

    Camera { center, zoom }
}

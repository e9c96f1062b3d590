use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single mappable point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Administrative region label, e.g. "新化县". Free text.
    pub area: String,
    /// Category labels, e.g. "高校", "学府". Missing in some records.
    #[serde(default)]
    pub tags: Vec<String>,
    pub desc: String,
    /// Display icon (an emoji string).
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Spot {
    pub fn coord(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// One historical claim group inside an era. Claims present-day regions by
/// keyword match against boundary polygon names; the first group in era order
/// wins a contested name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraGroup {
    pub name: String,
    pub color: String,
    /// Substrings expected to appear in a claimed polygon's name.
    pub members: Vec<String>,
    pub center: LatLng,
    pub zoom: f64,
}

/// A named historical period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Era {
    pub title: String,
    /// Display year label, e.g. "公元 1072 年".
    pub year: String,
    /// Descriptive HTML shown in the era panel.
    pub desc: String,
    pub center: LatLng,
    pub zoom: f64,
    pub groups: Vec<EraGroup>,
}

/// Map viewport: a center coordinate and a web-map zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: LatLng,
    pub zoom: f64,
}

/// Stroke/fill directive for one boundary polygon, pushed into the render sink.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl PolygonStyle {
    /// Fully transparent style for polygons no era group claims. The polygon
    /// stays in the render sink so hover behavior remains consistent.
    pub fn hidden() -> Self {
        Self {
            color: "transparent".to_string(),
            weight: 0.0,
            opacity: 0.0,
            fill_color: "transparent".to_string(),
            fill_opacity: 0.0,
        }
    }
}

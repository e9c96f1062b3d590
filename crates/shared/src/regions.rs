//! Canonical administrative-region table.
//!
//! Boundary polygon names and spot area labels are free text, so naive
//! substring filtering can conflate regions whose names share characters.
//! This table pins each known region to a stable id with one match keyword,
//! a display color, a camera, and a parent link; scope membership, color
//! lookup, and parent-scope drill-down all resolve through it.

use crate::models::{Camera, LatLng, PolygonStyle};

/// Stable id for a canonical region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    Hunan,
    Loudi,
    Xinhua,
    Lengshuijiang,
    Lianyuan,
    Shuangfeng,
    Louxing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionInfo {
    pub id: RegionId,
    /// Full display label as it appears in boundary data, e.g. "新化县".
    pub label: &'static str,
    /// Short keyword that appears in both polygon names and spot area labels.
    pub keyword: &'static str,
    pub color: &'static str,
    pub center: LatLng,
    pub zoom: f64,
    pub parent: Option<RegionId>,
}

/// Fallback accent color for spots whose area matches no known region.
pub const SPOT_FALLBACK_COLOR: &str = "#666";

/// Fallback stroke/fill color for unrecognized boundary polygons.
pub const BOUNDARY_FALLBACK_COLOR: &str = "#999";

pub const HUNAN: RegionInfo = RegionInfo {
    id: RegionId::Hunan,
    label: "湖南省",
    keyword: "湖南",
    color: "#64748b",
    center: LatLng::new(27.6104, 111.7088),
    zoom: 7.0,
    parent: None,
};

pub const LOUDI: RegionInfo = RegionInfo {
    id: RegionId::Loudi,
    label: "娄底市",
    keyword: "娄底",
    color: "#ef4444",
    center: LatLng::new(27.7017, 111.9963),
    zoom: 9.0,
    parent: Some(RegionId::Hunan),
};

/// Sub-regions of Loudi in color-lookup priority order.
pub const LOUDI_SUBREGIONS: [RegionInfo; 5] = [
    RegionInfo {
        id: RegionId::Xinhua,
        label: "新化县",
        keyword: "新化",
        color: "#8b5cf6",
        center: LatLng::new(27.7370, 111.3270),
        zoom: 10.0,
        parent: Some(RegionId::Loudi),
    },
    RegionInfo {
        id: RegionId::Lengshuijiang,
        label: "冷水江市",
        keyword: "冷水江",
        color: "#f97316",
        center: LatLng::new(27.6861, 111.4360),
        zoom: 11.0,
        parent: Some(RegionId::Loudi),
    },
    RegionInfo {
        id: RegionId::Lianyuan,
        label: "涟源市",
        keyword: "涟源",
        color: "#10b981",
        center: LatLng::new(27.6926, 111.6644),
        zoom: 10.0,
        parent: Some(RegionId::Loudi),
    },
    RegionInfo {
        id: RegionId::Shuangfeng,
        label: "双峰县",
        keyword: "双峰",
        color: "#3b82f6",
        center: LatLng::new(27.4563, 112.1751),
        zoom: 10.0,
        parent: Some(RegionId::Loudi),
    },
    RegionInfo {
        id: RegionId::Louxing,
        label: "娄星区",
        keyword: "娄星",
        color: "#ef4444",
        center: LatLng::new(27.7300, 112.0016),
        zoom: 11.0,
        parent: Some(RegionId::Loudi),
    },
];

/// Cycling palette for the parent-scope color-per-sub-region scheme, where
/// sub-regions (Hunan's prefectures) are not individually enumerated.
pub const PARENT_PALETTE: [&str; 7] = [
    "#8b5cf6", "#f97316", "#10b981", "#3b82f6", "#ef4444", "#eab308", "#06b6d4",
];

pub fn info(id: RegionId) -> &'static RegionInfo {
    match id {
        RegionId::Hunan => &HUNAN,
        RegionId::Loudi => &LOUDI,
        RegionId::Xinhua => &LOUDI_SUBREGIONS[0],
        RegionId::Lengshuijiang => &LOUDI_SUBREGIONS[1],
        RegionId::Lianyuan => &LOUDI_SUBREGIONS[2],
        RegionId::Shuangfeng => &LOUDI_SUBREGIONS[3],
        RegionId::Louxing => &LOUDI_SUBREGIONS[4],
    }
}

pub fn camera(id: RegionId) -> Camera {
    let region = info(id);
    Camera {
        center: region.center,
        zoom: region.zoom,
    }
}

/// Resolve a free-text name to a canonical region id. Exact label match is
/// tried before keyword containment so "新化县" and "新化" both land on the
/// same id.
pub fn resolve_region(name: &str) -> Option<RegionId> {
    const ALL: [&RegionInfo; 7] = [
        &HUNAN,
        &LOUDI,
        &LOUDI_SUBREGIONS[0],
        &LOUDI_SUBREGIONS[1],
        &LOUDI_SUBREGIONS[2],
        &LOUDI_SUBREGIONS[3],
        &LOUDI_SUBREGIONS[4],
    ];
    if let Some(region) = ALL.iter().find(|r| r.label == name) {
        return Some(region.id);
    }
    ALL.iter()
        .skip(2) // prefecture/province keywords never appear in county names
        .find(|r| name.contains(r.keyword))
        .map(|r| r.id)
}

/// First sub-region whose keyword appears in the given area label.
pub fn subregion_of(area: &str) -> Option<&'static RegionInfo> {
    LOUDI_SUBREGIONS.iter().find(|r| area.contains(r.keyword))
}

/// Accent color for a spot, by ordered keyword match on its area label.
pub fn spot_color(area: &str) -> &'static str {
    subregion_of(area).map_or(SPOT_FALLBACK_COLOR, |r| r.color)
}

/// Stroke/fill color for a present-day boundary polygon.
pub fn boundary_color(polygon_name: &str) -> &'static str {
    subregion_of(polygon_name).map_or(BOUNDARY_FALLBACK_COLOR, |r| r.color)
}

/// Constituent sub-region labels of the local scope, used by the scope filter.
pub fn scope_keywords() -> [&'static str; 5] {
    [
        LOUDI_SUBREGIONS[0].keyword,
        LOUDI_SUBREGIONS[1].keyword,
        LOUDI_SUBREGIONS[2].keyword,
        LOUDI_SUBREGIONS[3].keyword,
        LOUDI_SUBREGIONS[4].keyword,
    ]
}

/// Present-day polygon style for tour mode at local scope.
pub fn tour_style(polygon_name: &str) -> PolygonStyle {
    let color = boundary_color(polygon_name);
    PolygonStyle {
        color: color.to_string(),
        weight: 1.0,
        opacity: 1.0,
        fill_color: color.to_string(),
        fill_opacity: 0.1,
    }
}

/// Parent-scope polygon style: one palette color per sub-region, cycling by
/// feature index.
pub fn parent_style(feature_index: usize) -> PolygonStyle {
    let color = PARENT_PALETTE[feature_index % PARENT_PALETTE.len()];
    PolygonStyle {
        color: color.to_string(),
        weight: 1.0,
        opacity: 1.0,
        fill_color: color.to_string(),
        fill_opacity: 0.25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subregion_label_resolves_to_itself() {
        for region in &LOUDI_SUBREGIONS {
            assert_eq!(resolve_region(region.label), Some(region.id));
            assert_eq!(resolve_region(region.keyword), Some(region.id));
        }
    }

    #[test]
    fn test_prefecture_and_province_resolve_by_label() {
        assert_eq!(resolve_region("娄底市"), Some(RegionId::Loudi));
        assert_eq!(resolve_region("湖南省"), Some(RegionId::Hunan));
    }

    #[test]
    fn test_unknown_name_resolves_to_none() {
        assert_eq!(resolve_region("长沙市"), None);
        assert_eq!(resolve_region(""), None);
    }

    #[test]
    fn test_parent_chain() {
        let xinhua = info(RegionId::Xinhua);
        assert_eq!(xinhua.parent, Some(RegionId::Loudi));
        let loudi = info(RegionId::Loudi);
        assert_eq!(loudi.parent, Some(RegionId::Hunan));
        assert_eq!(info(RegionId::Hunan).parent, None);
    }

    #[test]
    fn test_spot_color_known_areas() {
        assert_eq!(spot_color("新化县"), "#8b5cf6");
        assert_eq!(spot_color("双峰县"), "#3b82f6");
        assert_eq!(spot_color("冷水江市"), "#f97316");
        assert_eq!(spot_color("涟源市"), "#10b981");
        assert_eq!(spot_color("娄星区"), "#ef4444");
    }

    #[test]
    fn test_spot_color_fallback() {
        assert_eq!(spot_color("邵阳市"), SPOT_FALLBACK_COLOR);
    }

    #[test]
    fn test_boundary_color_fallback() {
        assert_eq!(boundary_color("长沙县"), BOUNDARY_FALLBACK_COLOR);
    }

    #[test]
    fn test_tour_style_uses_region_color() {
        let style = tour_style("新化县");
        assert_eq!(style.color, "#8b5cf6");
        assert_eq!(style.fill_color, "#8b5cf6");
        assert!((style.fill_opacity - 0.1).abs() < 1e-9);
        assert!((style.weight - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parent_style_cycles_palette() {
        let a = parent_style(0);
        let b = parent_style(PARENT_PALETTE.len());
        assert_eq!(a.color, b.color);
        let c = parent_style(1);
        assert_ne!(a.color, c.color);
    }

    #[test]
    fn test_scope_keywords_cover_all_subregions() {
        let keywords = scope_keywords();
        assert_eq!(keywords.len(), LOUDI_SUBREGIONS.len());
        for region in &LOUDI_SUBREGIONS {
            assert!(keywords.contains(&region.keyword));
        }
    }
}

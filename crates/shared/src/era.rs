//! Historical-era boundary grouping.
//!
//! Each era claims present-day polygons through its ordered group list. A
//! polygon name can textually match keywords from more than one group; the
//! tie is broken by group order alone, never by match length or specificity.

use crate::models::{Era, EraGroup, PolygonStyle};

/// Index of the era shown when history mode is first entered.
pub const DEFAULT_ERA_INDEX: usize = 5;

/// Return the first group, in declaration order, with a member keyword that
/// is a substring of the polygon name. `None` means the polygon is unclaimed
/// under this era.
pub fn resolve_group<'a>(polygon_name: &str, era: &'a Era) -> Option<&'a EraGroup> {
    era.groups
        .iter()
        .find(|group| group.members.iter().any(|kw| polygon_name.contains(kw.as_str())))
}

/// Polygon style under an era: the claiming group's color, or fully
/// transparent for unclaimed polygons. Unclaimed polygons are styled, not
/// omitted, so the render sink keeps them for hover behavior.
pub fn history_style(polygon_name: &str, era: &Era) -> PolygonStyle {
    match resolve_group(polygon_name, era) {
        Some(group) => PolygonStyle {
            color: group.color.clone(),
            weight: 1.0,
            opacity: 1.0,
            fill_color: group.color.clone(),
            fill_opacity: 0.6,
        },
        None => PolygonStyle::hidden(),
    }
}

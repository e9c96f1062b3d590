//! Spot filtering: category, free-text search, and geographic scope
//! predicates combined by logical AND, preserving input order.

use crate::models::Spot;

/// Category filter selected in the sidebar. The UI decides whether a button
/// carries a tag or an area substring, so the engine never has to guess what
/// kind of string it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// Exact membership test against the spot's tag set, e.g. "高校".
    Tag(String),
    /// Case-sensitive substring test against the spot's area label.
    Area(String),
}

impl CategoryFilter {
    pub fn matches(&self, spot: &Spot) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => spot.tags.iter().any(|t| t == tag),
            CategoryFilter::Area(area) => spot.area.contains(area.as_str()),
        }
    }
}

/// Case-insensitive substring search over name, description, and area.
/// An empty term matches everything.
fn matches_search(spot: &Spot, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    spot.name.to_lowercase().contains(&term)
        || spot.desc.to_lowercase().contains(&term)
        || spot.area.to_lowercase().contains(&term)
}

/// A spot is in scope when its area label contains any of the scope's
/// constituent sub-region keywords.
fn in_scope(spot: &Spot, scope_keywords: &[&str]) -> bool {
    scope_keywords.iter().any(|kw| spot.area.contains(kw))
}

/// Compute the visible subset of spots for the current view. Order is the
/// input order; there is no ranking. An empty result is a valid terminal
/// state, not an error.
pub fn visible_spots<'a>(
    spots: &'a [Spot],
    filter: &CategoryFilter,
    search_term: &str,
    scope_keywords: Option<&[&str]>,
) -> Vec<&'a Spot> {
    spots
        .iter()
        .filter(|s| filter.matches(s))
        .filter(|s| matches_search(s, search_term))
        .filter(|s| scope_keywords.map_or(true, |kws| in_scope(s, kws)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(name: &str, area: &str, tags: &[&str], desc: &str) -> Spot {
        Spot {
            name: name.to_string(),
            lat: 27.7,
            lng: 111.9,
            area: area.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            desc: desc.to_string(),
            icon: "📍".to_string(),
            image: None,
        }
    }

    fn fixture() -> Vec<Spot> {
        vec![
            spot("梅山龙宫", "新化县", &[], "大型地下溶洞群"),
            spot("湖南人文科技学院", "娄星区", &["高校"], "省属本科院校"),
            spot("双峰书院", "双峰县", &["学府"], "清代县学书院"),
            spot("龙湾温泉度假区", "新化县", &[], "天然温泉"),
        ]
    }

    #[test]
    fn test_all_filter_returns_everything_in_order() {
        let spots = fixture();
        let visible = visible_spots(&spots, &CategoryFilter::All, "", None);
        assert_eq!(visible.len(), spots.len());
        for (got, want) in visible.iter().zip(spots.iter()) {
            assert_eq!(got.name, want.name);
        }
    }

    #[test]
    fn test_result_is_subset_satisfying_predicate() {
        let spots = fixture();
        let filter = CategoryFilter::Area("新化".to_string());
        let visible = visible_spots(&spots, &filter, "", None);
        assert!(visible.len() < spots.len());
        for s in &visible {
            assert!(filter.matches(s));
            assert!(spots.iter().any(|orig| orig == *s));
        }
    }

    #[test]
    fn test_tag_filter_requires_membership() {
        // A has the tag, B has only a different tag
        let spots = vec![
            spot("甲", "娄星区", &["高校", "学府"], ""),
            spot("乙", "娄星区", &["学府"], ""),
        ];
        let visible = visible_spots(&spots, &CategoryFilter::Tag("高校".to_string()), "", None);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "甲");
    }

    #[test]
    fn test_missing_tags_do_not_panic() {
        let spots = vec![spot("无标签", "新化县", &[], "")];
        let visible = visible_spots(&spots, &CategoryFilter::Tag("高校".to_string()), "", None);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_area_filter_is_substring_match() {
        let spots = fixture();
        let visible = visible_spots(&spots, &CategoryFilter::Area("双峰".to_string()), "", None);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "双峰书院");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let spots = vec![spot("Meishan 温泉公园", "新化县", &[], "spa resort")];
        let by_upper = visible_spots(&spots, &CategoryFilter::All, "MEISHAN", None);
        let by_lower = visible_spots(&spots, &CategoryFilter::All, "meishan", None);
        assert_eq!(by_upper.len(), 1);
        assert_eq!(by_lower.len(), 1);
        // CJK terms have no case but must still match as substrings
        let by_cjk = visible_spots(&spots, &CategoryFilter::All, "温泉", None);
        assert_eq!(by_cjk.len(), 1);
    }

    #[test]
    fn test_search_covers_desc_and_area() {
        let spots = fixture();
        let by_desc = visible_spots(&spots, &CategoryFilter::All, "溶洞", None);
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].name, "梅山龙宫");
        let by_area = visible_spots(&spots, &CategoryFilter::All, "娄星", None);
        assert_eq!(by_area.len(), 1);
    }

    #[test]
    fn test_search_never_admits_new_points() {
        let spots = fixture();
        for term in ["温泉", "书院", "xyz", "学院"] {
            let unfiltered = visible_spots(&spots, &CategoryFilter::All, "", None);
            let filtered = visible_spots(&spots, &CategoryFilter::All, term, None);
            for s in &filtered {
                assert!(unfiltered.contains(s), "search `{term}` admitted a new point");
            }
        }
    }

    #[test]
    fn test_filters_compose_with_and() {
        let spots = fixture();
        let filter = CategoryFilter::Area("新化".to_string());
        let visible = visible_spots(&spots, &filter, "温泉", None);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "龙湾温泉度假区");
    }

    #[test]
    fn test_scope_filter_drops_out_of_scope_areas() {
        let mut spots = fixture();
        spots.push(spot("岳麓书院", "长沙市", &["学府"], ""));
        let keywords = ["新化", "冷水江", "涟源", "双峰", "娄星"];
        let visible = visible_spots(&spots, &CategoryFilter::All, "", Some(&keywords));
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|s| s.area != "长沙市"));
    }

    #[test]
    fn test_idempotence() {
        let spots = fixture();
        let filter = CategoryFilter::Tag("学府".to_string());
        let first = visible_spots(&spots, &filter, "", None);
        let second = visible_spots(&spots, &filter, "", None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let spots = fixture();
        let visible = visible_spots(&spots, &CategoryFilter::All, "不存在的地方", None);
        assert!(visible.is_empty());
    }
}

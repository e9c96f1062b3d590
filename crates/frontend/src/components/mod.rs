pub mod map_view;
pub mod scope_toggle;
pub mod search_box;
pub mod spot_list;
pub mod tag_filter;
pub mod timeline;
